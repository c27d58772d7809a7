//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - The fixed-width name filter
//! - SHA-1 position derivation
//! - Integer encodings of the filter value
//! - Configuration for the shared service
//!
//! RULES:
//! - No I/O operations
//! - No locking, no logging
//! - Pure functions where possible

pub mod bloom_names;
pub mod codec;
pub mod config;
pub mod hash_functions;

pub use bloom_names::BloomNames;
pub use config::{NameFilterConfig, NameFilterConfigBuilder, MAX_CAPACITY};
pub use hash_functions::{hash_positions, hash_positions_bytes, hex_digest, Positions};

/// Number of bits in the filter (m)
pub const FILTER_SIZE: usize = 30_000;

/// Number of positions derived per name (k)
pub const HASH_COUNT: usize = 7;

/// Number of distinct names the filter is tuned for (n)
pub const DESIGN_CAPACITY: usize = 3_000;

/// False positive rate at `DESIGN_CAPACITY`, fixed offline from m, k and n
pub const DESIGN_FPR: f64 = 0.01;

/// Hex digits of the SHA-1 digest consumed per position
pub const CHUNK_HEX_DIGITS: usize = 5;

/// 64-bit words backing the filter
pub const WORD_COUNT: usize = (FILTER_SIZE + 63) / 64;

/// Bytes in the fixed-width little-endian encoding of the filter value
pub const VALUE_BYTES: usize = FILTER_SIZE / 8;
