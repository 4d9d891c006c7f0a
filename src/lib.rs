//! Sharded concurrent in-memory key-value store.
//!
//! This library provides two interchangeable string-to-string stores behind
//! one [`Store`] trait: a single-lock [`StandardStore`] and a [`ShardedStore`]
//! that routes each key to one of N independently-locked partitions. Sharding
//! does not change the observable semantics, only how much lock contention
//! concurrent callers experience.
//!
//! # Quick Start
//!
//! ```
//! use shard_kv::prelude::*;
//!
//! // A sharded store with the default 16 shards
//! let store = ShardedStore::new();
//!
//! store.set("apan", "bapan");
//! assert_eq!(store.get("apan").as_deref(), Some("bapan"));
//!
//! // A custom shard count (must be a nonzero power of two)
//! let store = ShardedStore::with_shard_count(64)?;
//! store.set("key", "value");
//! # Ok::<(), shard_kv::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`routing`] - Key-to-shard routing: hash, mixing, and index functions
//! - [`store`] - The [`Store`] trait and both store implementations
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own
//!   subscriber)

mod error;
mod logging;
pub mod prelude;
pub mod routing;
pub mod store;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export store types at crate root for convenience
pub use store::{ShardedStore, StandardStore, Store};

// Re-export the default shard count for callers tuning their own
pub use routing::DEFAULT_SHARD_COUNT;
