//! Store trait and implementations.
//!
//! Two store variants satisfy the same [`Store`] contract: a single-lock
//! [`StandardStore`] and a [`ShardedStore`] that partitions keys across
//! independently-locked shards. Callers pick one at construction and
//! cannot otherwise tell them apart.

mod sharded;
mod standard;

pub use sharded::ShardedStore;
pub use standard::StandardStore;

/// Uniform contract for string key-value stores.
///
/// Both operations are total: `set` always succeeds and `get` signals
/// absence with `None` rather than an error. Implementations are safe to
/// share across threads.
///
/// # Example
///
/// ```
/// use shard_kv::{ShardedStore, StandardStore, Store};
///
/// // The two variants are interchangeable behind the trait
/// let stores: Vec<Box<dyn Store>> = vec![
///     Box::new(StandardStore::new()),
///     Box::new(ShardedStore::new()),
/// ];
///
/// for store in &stores {
///     store.set("apan", "bapan");
///     assert_eq!(store.get("apan").as_deref(), Some("bapan"));
/// }
/// ```
pub trait Store: Send + Sync {
    /// Look up the value stored under `key`.
    ///
    /// Returns `None` if the key was never set. A stored empty string is
    /// distinguishable from absence; callers wanting empty-string-for-absent
    /// semantics can use `get(key).unwrap_or_default()`.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str);
}
