use async_graphql::{ID, SimpleObject};

use crate::model::User as ModelUser;

/// A user record as exposed through the schema.
///
/// Field names surface in camelCase (`isMarried`), matching the published
/// SDL.
#[derive(SimpleObject)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub age: i32,
    pub is_married: bool,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            age: u.age,
            is_married: u.is_married,
        }
    }
}
