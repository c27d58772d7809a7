//! Name filter service configuration and validation
//!
//! The filter geometry (m = 30,000, k = 7) is fixed. What can be configured
//! is how the shared service treats insertions beyond the tuned load.
//!
//! # Example
//!
//! ```ignore
//! use bloom_names::domain::NameFilterConfigBuilder;
//!
//! let config = NameFilterConfigBuilder::new()
//!     .capacity(2_500)
//!     .reject_over_capacity(true)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use super::{DESIGN_CAPACITY, FILTER_SIZE};
use crate::error::FilterError;

/// Largest accepted capacity: one admitted name per filter bit
pub const MAX_CAPACITY: usize = FILTER_SIZE;

/// Name filter service configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFilterConfig {
    /// Admitted names before the filter counts as over capacity
    pub capacity: usize,
    /// Refuse new names over capacity instead of warning
    pub reject_over_capacity: bool,
}

impl Default for NameFilterConfig {
    fn default() -> Self {
        Self {
            capacity: DESIGN_CAPACITY,
            reject_over_capacity: false,
        }
    }
}

impl NameFilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, reject_over_capacity: bool) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            reject_over_capacity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.capacity == 0 {
            return Err(FilterError::InvalidParameters(
                "capacity cannot be 0".to_string(),
            ));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(FilterError::InvalidParameters(format!(
                "capacity {} exceeds maximum {}",
                self.capacity, MAX_CAPACITY
            )));
        }

        Ok(())
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set the over-capacity policy
    pub fn with_reject_over_capacity(mut self, reject: bool) -> Self {
        self.reject_over_capacity = reject;
        self
    }
}

/// Builder for NameFilterConfig with validation
#[derive(Default)]
pub struct NameFilterConfigBuilder {
    capacity: Option<usize>,
    reject_over_capacity: Option<bool>,
}

impl NameFilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of names admitted before the filter is over capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Refuse (true) or only warn about (false) names over capacity
    pub fn reject_over_capacity(mut self, reject: bool) -> Self {
        self.reject_over_capacity = Some(reject);
        self
    }

    /// Build the NameFilterConfig, validating all parameters
    pub fn build(self) -> Result<NameFilterConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation (for internal use only)
    pub fn build_unchecked(self) -> NameFilterConfig {
        let defaults = NameFilterConfig::default();

        NameFilterConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            reject_over_capacity: self
                .reject_over_capacity
                .unwrap_or(defaults.reject_over_capacity),
        }
    }
}
