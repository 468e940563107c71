use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::store::UserStore;

use super::types::User;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: UserStore) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(Arc::new(store))
        .finish()
}

fn get_store<'c>(ctx: &'c Context<'_>) -> &'c UserStore {
    ctx.data::<Arc<UserStore>>().unwrap()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns all users in insertion order
    async fn get_users(&self, ctx: &Context<'_>) -> Vec<User> {
        let store = get_store(ctx);
        store.list().into_iter().map(Into::into).collect()
    }

    /// Returns a single user by unique identifier, or null when no record
    /// matches
    async fn get_user_by_id(&self, ctx: &Context<'_>, id: ID) -> Option<User> {
        let store = get_store(ctx);
        store.find_by_id(id.as_str()).map(Into::into)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a new user and returns it
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
        is_married: bool,
    ) -> User {
        let store = get_store(ctx);
        store.create(name, age, is_married).into()
    }
}
