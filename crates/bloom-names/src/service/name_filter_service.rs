//! Name Filter Service
//!
//! Shares one `BloomNames` between threads. Every mutation runs under the
//! write lock, so concurrent `contains` calls never observe a half-applied
//! `add`; lookups share the read lock and run in parallel.
//!
//! The service also counts admitted names (adds whose name was not already
//! reported present) against the configured capacity.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::{hash_positions, BloomNames, NameFilterConfig};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::NameFilterApi;

struct FilterState {
    filter: BloomNames,
    /// Names admitted through this service
    admitted: usize,
    /// Over-capacity warning already emitted
    over_capacity_reported: bool,
}

/// Name Filter Service implementation
///
/// Implements the `NameFilterApi` port over a lock-guarded filter.
pub struct NameFilterService {
    state: RwLock<FilterState>,
    config: NameFilterConfig,
    metrics: Arc<dyn MetricsRecorder>,
}

impl NameFilterService {
    /// Create a service over an empty filter with the default configuration
    pub fn new() -> Self {
        Self::build(BloomNames::new(), NameFilterConfig::default())
    }

    /// Create a service over an empty filter
    pub fn with_config(config: NameFilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::build(BloomNames::new(), config))
    }

    /// Create a service over an existing filter
    ///
    /// Names already in `filter` are not known individually, so the admitted
    /// count starts at zero.
    pub fn from_filter(filter: BloomNames, config: NameFilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::build(filter, config))
    }

    /// Record operations through the given recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    fn build(filter: BloomNames, config: NameFilterConfig) -> Self {
        Self {
            state: RwLock::new(FilterState {
                filter,
                admitted: 0,
                over_capacity_reported: false,
            }),
            config,
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &NameFilterConfig {
        &self.config
    }

    /// Number of names admitted through this service
    pub fn admitted(&self) -> usize {
        self.state.read().admitted
    }

    /// Whether more names were admitted than the configured capacity
    pub fn is_over_capacity(&self) -> bool {
        self.admitted() > self.config.capacity
    }

    /// Consume the service, returning the filter
    pub fn into_inner(self) -> BloomNames {
        self.state.into_inner().filter
    }
}

impl Default for NameFilterService {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFilterApi for NameFilterService {
    fn add(&self, name: &str) -> Result<bool, FilterError> {
        let start = Instant::now();
        let positions = hash_positions(name);
        let capacity = self.config.capacity;

        let mut state = self.state.write();

        if state.filter.contains_positions(&positions) {
            drop(state);
            self.metrics.record_insert(start.elapsed(), false);
            return Ok(false);
        }

        if state.admitted >= capacity {
            if self.config.reject_over_capacity {
                drop(state);
                warn!(capacity, "Rejected name: filter is at capacity");
                self.metrics.record_rejected();
                return Err(FilterError::CapacityExceeded { capacity });
            }

            if !state.over_capacity_reported {
                state.over_capacity_reported = true;
                warn!(
                    capacity,
                    admitted = state.admitted + 1,
                    "Filter exceeded its tuned capacity, false positive rate will rise"
                );
            }
        }

        state.filter.insert_positions(&positions);
        state.admitted += 1;
        let admitted = state.admitted;
        drop(state);

        debug!(admitted, "Admitted name to filter");
        self.metrics.record_insert(start.elapsed(), true);
        Ok(true)
    }

    fn contains(&self, name: &str) -> bool {
        let start = Instant::now();
        let positions = hash_positions(name);

        let found = self.state.read().filter.contains_positions(&positions);

        self.metrics.record_lookup(start.elapsed(), found);
        found
    }

    fn snapshot(&self) -> BloomNames {
        self.state.read().filter.clone()
    }

    fn merge(&self, other: &BloomNames) {
        let bits_set = {
            let mut state = self.state.write();
            state.filter.merge(other);
            state.filter.bits_set()
        };

        debug!(bits_set, "Merged filter into shared state");
        self.metrics.record_merge();
    }
}
