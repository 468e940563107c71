//! GraphQL schema, resolvers, and HTTP transport for roster.
//!
//! The schema owns a seeded [`crate::store::UserStore`] and exposes it over
//! a single HTTP endpoint: GET serves a GraphiQL landing page, POST executes
//! query and mutation documents.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! roster serve --port 4000
//!
//! # Execute a query from the CLI
//! roster query '{ getUsers { id name age isMarried } }'
//!
//! # Execute a mutation from the CLI
//! roster mutate 'createUser(name: "Test User", age: 40, isMarried: true) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getUsers`, `getUserById`
//! - **Mutations**: `createUser`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RosterSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
