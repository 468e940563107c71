use std::sync::{Mutex, MutexGuard};

use crate::model::{User, seed_users};

/// The authoritative in-memory user sequence.
///
/// Records are only ever appended; nothing is removed or mutated in place,
/// so insertion order doubles as listing order. The sequence is guarded by
/// a mutex because the HTTP layer executes resolvers on a multi-threaded
/// runtime; id generation and the append happen under a single guard so
/// concurrent creates cannot mint the same id.
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// A store populated with the fixed seed set (ids "1".."13").
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        // A poisoned guard still holds a consistent sequence
        self.users.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The full ordered sequence of current records.
    pub fn list(&self) -> Vec<User> {
        self.lock().clone()
    }

    /// The first record whose id matches, or `None`. A miss is not an error.
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.lock().iter().find(|u| u.id == id).cloned()
    }

    /// Number of records currently in the store.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Append a new record and return it.
    ///
    /// The id is derived from the current sequence length (`len + 1` as a
    /// string), not from an independent counter. Since records are never
    /// removed the two are equivalent, but the length-derived form is the
    /// contract. No field validation happens here; the schema boundary has
    /// already type-checked the arguments.
    pub fn create(&self, name: String, age: i32, is_married: bool) -> User {
        let mut users = self.lock();
        let user = User {
            id: (users.len() + 1).to_string(),
            name,
            age,
            is_married,
        };
        tracing::info!(id = %user.id, name = %user.name, "Creating user");
        users.push(user.clone());
        user
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_thirteen_records() {
        let store = UserStore::seeded();
        assert_eq!(store.len(), 13);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = UserStore::seeded();
        let users = store.list();
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(
            ids,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13"]
        );
    }

    #[test]
    fn test_find_by_id_returns_matching_record() {
        let store = UserStore::seeded();
        let user = store.find_by_id("2").unwrap();
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.age, 25);
        assert!(!user.is_married);
    }

    #[test]
    fn test_find_by_id_miss_is_none() {
        let store = UserStore::seeded();
        assert!(store.find_by_id("999").is_none());
        assert!(store.find_by_id("").is_none());
    }

    #[test]
    fn test_create_derives_id_from_length() {
        let store = UserStore::seeded();
        let user = store.create("Test User".to_string(), 40, true);
        assert_eq!(user.id, "14");
        assert_eq!(store.len(), 14);
        assert_eq!(store.find_by_id("14").unwrap(), user);
    }

    #[test]
    fn test_create_is_monotonic() {
        let store = UserStore::new(Vec::new());
        for expected in 1..=5 {
            let user = store.create(format!("User {}", expected), 20 + expected, false);
            assert_eq!(user.id, expected.to_string());
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_create_accepts_unvalidated_fields() {
        // Empty names, zero and negative ages pass through untouched.
        let store = UserStore::new(Vec::new());
        let user = store.create(String::new(), -3, false);
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "");
        assert_eq!(user.age, -3);
    }

    #[test]
    fn test_create_is_not_idempotent() {
        let store = UserStore::seeded();
        let first = store.create("Twin".to_string(), 33, true);
        let second = store.create("Twin".to_string(), 33, true);
        assert_ne!(first.id, second.id);
        assert_eq!(first.id, "14");
        assert_eq!(second.id, "15");
        assert_eq!(store.len(), 15);
    }

    #[test]
    fn test_concurrent_creates_mint_distinct_ids() {
        use std::sync::Arc;

        let store = Arc::new(UserStore::seeded());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create(format!("Worker {}", i), 30, false).id)
            })
            .collect();

        let mut ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_by_key(|id| id.parse::<u64>().unwrap());
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(store.len(), 21);
    }
}
