//! Error types for libcache

use thiserror::Error;

/// Result type alias for libcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// Construction is the only fallible step. Every operation on a live cache is
/// total: missing keys, inserts into a full cache and quiet overwrites are
/// ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    /// Requested capacity is below the minimum of one entry
    #[error("LRU cache capacity must be >= 1, got {capacity}")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },
}
