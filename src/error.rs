//! Unified error type for the shard-kv library.
//!
//! Store operations themselves are infallible; the only thing that can go
//! wrong is constructing a sharded store with a shard count the bitmask
//! routing cannot support.

use thiserror::Error;

/// Unified error type for all shard-kv operations.
///
/// # Example
///
/// ```
/// use shard_kv::ShardedStore;
///
/// let err = ShardedStore::with_shard_count(12).unwrap_err();
/// assert!(err.is_invalid_shard_count());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The requested shard count is not a nonzero power of two.
    ///
    /// Shard routing masks the key hash with `count - 1`, which only
    /// selects every shard when the count is a power of two.
    #[error("invalid shard count {0}: must be a nonzero power of two")]
    InvalidShardCount(usize),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a shard count validation error.
    pub fn is_invalid_shard_count(&self) -> bool {
        matches!(self, Self::InvalidShardCount(_))
    }
}
