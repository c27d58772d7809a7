//! Inbound Ports (Driving Ports)
//!
//! The API that embedding systems use to share one name filter between
//! threads.

use crate::domain::BloomNames;
use crate::error::FilterError;

/// Shared name filter API (Driving Port)
///
/// All methods take `&self`: implementations serialize mutation internally,
/// so a single instance can sit behind an `Arc` and be driven from many
/// threads.
pub trait NameFilterApi: Send + Sync {
    /// Add a name
    ///
    /// # Returns
    /// `true` if the name was newly admitted, `false` if the filter already
    /// reported it present (including false positives).
    fn add(&self, name: &str) -> Result<bool, FilterError>;

    /// Test if a name might have been added
    fn contains(&self, name: &str) -> bool;

    /// Copy of the current filter state
    fn snapshot(&self) -> BloomNames;

    /// OR another filter's bits into the shared filter
    fn merge(&self, other: &BloomNames);
}
