//! Cache configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::{OverwritePolicy, PromotionPolicy};

/// Construction-time settings for an [`LruCache`](crate::LruCache)
///
/// No `Default`: a capacity must always be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LruConfig {
    /// Maximum number of entries (>= 1)
    pub capacity: usize,

    /// Policy used by `insert` on a present key
    #[cfg_attr(feature = "serde", serde(default))]
    pub overwrite: OverwritePolicy,

    /// Policy used by `get`
    #[cfg_attr(feature = "serde", serde(default))]
    pub promotion: PromotionPolicy,
}

impl LruConfig {
    /// Config with the given capacity and default policies
    /// (`Overwrite` on insert, `Quiet` on get)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            overwrite: OverwritePolicy::default(),
            promotion: PromotionPolicy::default(),
        }
    }

    /// Set the default overwrite policy
    pub fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the default promotion policy
    pub fn with_promotion(mut self, promotion: PromotionPolicy) -> Self {
        self.promotion = promotion;
        self
    }

    /// Check the config can back a cache
    ///
    /// # Returns
    /// * `Err(Error::InvalidCapacity)` if `capacity < 1`
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            return Err(Error::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
