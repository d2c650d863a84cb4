//! Overwrite and promotion policies
//!
//! Each axis has two named states. A cache picks its defaults at construction
//! (see [`LruConfig`](crate::LruConfig)); `insert_with` and `get_with` override
//! them for a single call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What `insert` does when the key is already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverwritePolicy {
    /// Replace the stored value and promote the key to most-recently-used
    #[default]
    Overwrite,

    /// Leave value and recency untouched (insert-if-absent)
    Quiet,
}

/// Whether `get` on a present key counts as a use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PromotionPolicy {
    /// Promote the key to most-recently-used on every hit
    Update,

    /// Read without reordering
    #[default]
    Quiet,
}

impl OverwritePolicy {
    /// True if an insert on a present key replaces its value
    pub fn replaces(self) -> bool {
        self == OverwritePolicy::Overwrite
    }
}

impl PromotionPolicy {
    /// True if a hit promotes the key
    pub fn promotes(self) -> bool {
        self == PromotionPolicy::Update
    }
}
