//! Key-to-shard routing: hash, mixing, and index functions.
//!
//! Routing is deterministic: the same key always maps to the same shard
//! index for a given shard count, so a value written through one call is
//! always found by later lookups. The functions here are pure and carry no
//! state; [`ShardedStore`](crate::ShardedStore) binds them to its shard
//! count at construction.

/// Default number of shards for a [`ShardedStore`](crate::ShardedStore).
///
/// Chosen empirically; must be a nonzero power of two so that
/// [`shard_index`] can mask instead of dividing.
pub const DEFAULT_SHARD_COUNT: usize = 16;

/// Hash a key for shard routing.
///
/// Only the first character's code point is hashed: every key sharing a
/// leading character lands in the same shard. Key sets with a common
/// prefix character therefore collide onto a single shard and see no
/// contention benefit from sharding. An empty key hashes as code point 0.
///
/// # Example
///
/// ```
/// use shard_kv::routing::hash_key;
///
/// // Keys with the same leading character hash identically
/// assert_eq!(hash_key("A"), hash_key("APAN"));
/// ```
#[inline]
pub fn hash_key(key: &str) -> u64 {
    let codepoint = key.chars().next().map_or(0, u64::from);
    mix(codepoint)
}

/// Bit-diffusion mixing step applied to the raw code point.
///
/// A cheap xor-shift avalanche (no multiplication), not cryptographic.
/// The shift constants must stay exactly as-is to preserve shard
/// placement across versions.
#[inline]
pub fn mix(h: u64) -> u64 {
    let h = h ^ (h >> 20) ^ (h >> 12);
    h ^ (h >> 7) ^ (h >> 4)
}

/// Reduce a hash to a shard index in `[0, shard_count)`.
///
/// Uses the bitmask `h & (shard_count - 1)` instead of a true modulo,
/// which is only valid when `shard_count` is a power of two. Callers are
/// responsible for that precondition; [`ShardedStore`](crate::ShardedStore)
/// validates it at construction.
#[inline]
pub fn shard_index(h: u64, shard_count: usize) -> usize {
    (h as usize) & (shard_count - 1)
}
