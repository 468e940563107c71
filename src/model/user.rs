use serde::{Deserialize, Serialize};

/// A directory record.
///
/// The `id` is unique within a store and treated as opaque by everything
/// except the store's id-generation policy. No other field carries a
/// uniqueness or range constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub is_married: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32, is_married: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            is_married,
        }
    }
}

/// The fixed seed set loaded into a store at process start.
///
/// Ids are "1" through "13" in insertion order; the count-derived id policy
/// of the store continues from this sequence.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", 30, true),
        User::new("2", "Jane Smith", 25, false),
        User::new("3", "Alice Johnson", 28, false),
        User::new("4", "Aarav Sharma", 27, false),
        User::new("5", "Priya Patel", 24, false),
        User::new("6", "Rahul Verma", 32, true),
        User::new("7", "Ananya Iyer", 29, false),
        User::new("8", "Vikram Singh", 35, true),
        User::new("9", "Neha Kapoor", 26, false),
        User::new("10", "Aditi Nair", 31, true),
        User::new("11", "Rohan Gupta", 23, false),
        User::new("12", "Kavya Reddy", 28, false),
        User::new("13", "Sanjay Mehta", 34, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential_and_unique() {
        let users = seed_users();
        assert_eq!(users.len(), 13);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.id, (i + 1).to_string());
        }
    }

    #[test]
    fn test_seed_second_record() {
        let users = seed_users();
        assert_eq!(users[1], User::new("2", "Jane Smith", 25, false));
    }
}
