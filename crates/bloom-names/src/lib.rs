//! # Bloom Names
//!
//! A fixed-size Bloom filter for tracking string names: 30,000 bits and 7
//! positions per name, tuned for 3,000 names at a 1% false positive rate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomNames`: The filter itself
//!   - `hash_positions`: SHA-1 position derivation
//!   - `codec`: Integer encodings of the filter value
//!   - `NameFilterConfig`: Service configuration with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `NameFilterApi`: Driving port for shared use
//!
//! - **Service Layer** (`service/`): Concurrency
//!   - `NameFilterService`: Lock-guarded filter implementing `NameFilterApi`
//!
//! ## Invariants
//!
//! - No false negatives: if added, `contains()` MUST return true
//! - Bits are never cleared
//! - Equal bit arrays are equal filters, whatever the insertion history
//!
//! ## Compatibility
//!
//! Names are hashed as UTF-8 (`add_bytes` / `contains_bytes` take raw
//! bytes). Positions come from the first 35 hex digits of the SHA-1 digest
//! and duplicates are kept, so filter values are bit-for-bit interchangeable
//! with other implementations of the same scheme.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_names::BloomNames;
//!
//! let mut filter = BloomNames::new_empty();
//! filter.add("alice").add("bob");
//!
//! assert!(filter.contains("alice"));
//!
//! // The whole state is one integer below 2^30000
//! let stored = filter.to_hex();
//! let restored = BloomNames::from_hex(&stored).unwrap();
//! assert_eq!(restored, filter);
//! ```
//!
//! ## Sharing Between Threads
//!
//! ```
//! use bloom_names::{NameFilterApi, NameFilterService};
//! use std::sync::Arc;
//!
//! let service = Arc::new(NameFilterService::new());
//! service.add("alice").unwrap();
//! assert!(service.contains("alice"));
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    hash_positions, hash_positions_bytes, hex_digest, BloomNames, NameFilterConfig,
    NameFilterConfigBuilder, Positions, CHUNK_HEX_DIGITS, DESIGN_CAPACITY, DESIGN_FPR,
    FILTER_SIZE, HASH_COUNT, VALUE_BYTES, WORD_COUNT,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::NameFilterApi;
pub use service::NameFilterService;
