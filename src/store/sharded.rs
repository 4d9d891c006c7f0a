//! Sharded store implementation.

use crate::logging::{debug, trace};
use crate::routing::{hash_key, shard_index, DEFAULT_SHARD_COUNT};
use crate::{Error, Result};

use super::standard::StandardStore;
use super::Store;

/// A store that partitions keys across independently-locked shards.
///
/// Each operation hashes its key, masks the hash down to a shard index,
/// and delegates to that shard's [`StandardStore`]. Operations on keys
/// routed to different shards never contend for the same lock, which is
/// the whole point: under parallel write load the critical section any
/// one operation waits on shrinks by roughly the shard count.
///
/// The shard array and routing function are fixed at construction; the
/// same key always routes to the same shard for the store's lifetime.
/// Writes to the same shard are linearized by that shard's lock; across
/// shards there is no ordering relationship.
///
/// # Example
///
/// ```
/// use shard_kv::ShardedStore;
///
/// let store = ShardedStore::new();
/// store.set("apan", "bapan");
/// assert_eq!(store.get("apan").as_deref(), Some("bapan"));
/// ```
#[derive(Debug)]
pub struct ShardedStore {
    shards: Box<[StandardStore]>,
}

impl ShardedStore {
    /// Create a store with the default shard count
    /// ([`DEFAULT_SHARD_COUNT`], 16).
    pub fn new() -> Self {
        let shards = (0..DEFAULT_SHARD_COUNT)
            .map(|_| StandardStore::new())
            .collect();
        debug!(shards = DEFAULT_SHARD_COUNT, "created sharded store");
        Self { shards }
    }

    /// Create a store with a custom shard count.
    ///
    /// The count must be a nonzero power of two so the routing bitmask
    /// selects every shard; anything else is rejected with
    /// [`Error::InvalidShardCount`].
    ///
    /// # Example
    ///
    /// ```
    /// use shard_kv::ShardedStore;
    ///
    /// let store = ShardedStore::with_shard_count(64)?;
    /// assert_eq!(store.shard_count(), 64);
    ///
    /// assert!(ShardedStore::with_shard_count(0).is_err());
    /// assert!(ShardedStore::with_shard_count(12).is_err());
    /// # Ok::<(), shard_kv::Error>(())
    /// ```
    pub fn with_shard_count(count: usize) -> Result<Self> {
        if count == 0 || !count.is_power_of_two() {
            return Err(Error::InvalidShardCount(count));
        }

        let shards = (0..count).map(|_| StandardStore::new()).collect();
        debug!(shards = count, "created sharded store");
        Ok(Self { shards })
    }

    /// Number of shards in this store.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Look up the value stored under `key` in the shard it routes to.
    pub fn get(&self, key: &str) -> Option<String> {
        self.shard_for(key)?.get(key)
    }

    /// Insert or overwrite the value for `key` in the shard it routes to.
    pub fn set(&self, key: &str, value: &str) {
        if let Some(shard) = self.shard_for(key) {
            shard.set(key, value);
        }
    }

    /// Select the shard responsible for `key`.
    ///
    /// The mask in [`shard_index`] keeps the index within bounds for any
    /// power-of-two shard count, so this never actually returns `None`.
    fn shard_for(&self, key: &str) -> Option<&StandardStore> {
        let idx = shard_index(hash_key(key), self.shards.len());
        trace!(key = key, shard = idx, "routing key");
        self.shards.get(idx)
    }
}

impl Default for ShardedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for ShardedStore {
    fn get(&self, key: &str) -> Option<String> {
        ShardedStore::get(self, key)
    }

    fn set(&self, key: &str, value: &str) {
        ShardedStore::set(self, key, value);
    }
}
