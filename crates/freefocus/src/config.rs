#![forbid(unsafe_code)]

//! Navigation configuration.

use crate::error::NavError;

/// Per-navigator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Candidates scoring at or above this value are ignored.
    ///
    /// Default: `f64::INFINITY`.
    pub max_distance: f64,
    /// Read and write measured boxes through the bounds cache during moves.
    ///
    /// When enabled, hosts must invalidate elements that move or resize.
    /// Default: `false`.
    pub cache: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            max_distance: f64::INFINITY,
            cache: false,
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Reject settings no move could honour.
    pub fn validate(&self) -> Result<(), NavError> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(NavError::InvalidMaxDistance(self.max_distance));
        }
        Ok(())
    }
}
