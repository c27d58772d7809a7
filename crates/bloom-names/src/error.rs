//! Error types for the name filter

use thiserror::Error;

/// Errors that can occur when building or driving a name filter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A supplied filter value has a bit set at or beyond the filter width.
    ///
    /// Truncating would silently move bits and break the no-false-negative
    /// guarantee for names added before the value was stored.
    #[error("Filter value out of range: bit {bit} set, filter holds bits 0..{max}")]
    ValueOutOfRange { bit: usize, max: usize },

    #[error("Invalid word count: {len} (expected {expected})")]
    InvalidLength { len: usize, expected: usize },

    #[error("Invalid hex filter value: {0}")]
    InvalidHex(String),

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Filter capacity exceeded: {capacity} names already admitted")]
    CapacityExceeded { capacity: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
