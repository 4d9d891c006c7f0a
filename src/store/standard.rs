//! Single-lock store implementation.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::Store;

/// A string key-value store guarded by one read-write lock.
///
/// Readers proceed concurrently with other readers; writers are exclusive.
/// The map is unbounded: there is no eviction, expiry, or clear operation,
/// and entries live as long as the store does.
///
/// Under heavy parallel write load every operation contends for the same
/// lock; [`ShardedStore`](crate::ShardedStore) exists to spread that
/// contention across partitions.
///
/// # Example
///
/// ```
/// use shard_kv::StandardStore;
///
/// let store = StandardStore::new();
/// store.set("apan", "bapan");
/// assert_eq!(store.get("apan").as_deref(), Some("bapan"));
/// assert_eq!(store.get("missing"), None);
/// ```
#[derive(Debug, Default)]
pub struct StandardStore {
    map: RwLock<HashMap<String, String>>,
}

impl StandardStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value stored under `key` while holding a shared lock.
    pub fn get(&self, key: &str) -> Option<String> {
        self.map.read().get(key).cloned()
    }

    /// Insert or overwrite the value for `key` while holding the
    /// exclusive lock.
    pub fn set(&self, key: &str, value: &str) {
        self.map.write().insert(key.to_owned(), value.to_owned());
    }
}

impl Store for StandardStore {
    fn get(&self, key: &str) -> Option<String> {
        StandardStore::get(self, key)
    }

    fn set(&self, key: &str, value: &str) {
        StandardStore::set(self, key, value);
    }
}
