//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```
//! use shard_kv::prelude::*;
//!
//! let store = ShardedStore::new();
//! store.set("apan", "bapan");
//! assert_eq!(store.get("apan").as_deref(), Some("bapan"));
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Store trait and implementations
pub use crate::store::{ShardedStore, StandardStore, Store};

// Routing functions, for callers verifying or tuning shard placement
pub use crate::routing::{hash_key, shard_index, DEFAULT_SHARD_COUNT};
