mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::RosterConfig;
use crate::store::UserStore;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
    pub store: UserStore,
}

impl CommandContext {
    pub fn new(config: RosterConfig) -> Self {
        Self {
            config,
            store: UserStore::seeded(),
        }
    }
}
