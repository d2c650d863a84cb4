//! # libcache
//!
//! Fixed-capacity, in-memory LRU cache.
//!
//! ## Architecture
//! - **Lookup index**: AHash map from key to value and list locator (O(1))
//! - **Recency list**: index-linked list of keys, most recent first (O(1))
//! - **Policies**: per-cache defaults for overwrite and read promotion,
//!   overridable per call
//!
//! ```
//! use libcache::{LruCache, PromotionPolicy};
//!
//! let mut cache = LruCache::new(2)?;
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//!
//! // Reads are quiet by default; ask for promotion explicitly
//! cache.get_with(&1, PromotionPolicy::Update);
//! cache.insert(3, "three"); // evicts 2
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! # Ok::<(), libcache::Error>(())
//! ```
//!
//! ## Concurrency
//! The cache does no locking of its own. Callers sharing one instance across
//! threads hold a lock around every call:
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use libcache::LruCache;
//!
//! let cache = Arc::new(Mutex::new(LruCache::new(128)?));
//! cache.lock().insert("key", 42);
//! assert_eq!(cache.lock().get("key"), Some(&42));
//! # Ok::<(), libcache::Error>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod list;
mod lru;
mod policy;

pub use config::LruConfig;
pub use error::{Error, Result};
pub use list::Keys;
pub use lru::{Iter, LruCache};
pub use policy::{OverwritePolicy, PromotionPolicy};
