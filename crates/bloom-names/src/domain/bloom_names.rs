//! Core name filter
//!
//! A 30,000-bit Bloom filter with 7 positions per name, tuned for 3,000
//! names at a 1% false positive rate.
//!
//! INVARIANTS:
//! - No false negatives: after `add(name)`, `contains(name)` is true
//! - Monotonic: bits are only ever set, never cleared
//! - Bits at or beyond `FILTER_SIZE` (the word padding) are always zero
//!
//! The filter value is the integer whose bit `p` is filter bit `p`. The
//! backing words are its little-endian 64-bit limbs.

use std::fmt;

use bitvec::prelude::*;

use super::hash_functions::{hash_positions, hash_positions_bytes, Positions};
use super::{FILTER_SIZE, WORD_COUNT};
use crate::error::FilterError;

/// Bloom filter over string names
///
/// Equality is equality of the bit array: two filters holding the same bits
/// answer every query the same way, whatever their insertion history.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BloomNames {
    words: [u64; WORD_COUNT],
}

impl BloomNames {
    /// Create an empty filter
    pub fn new() -> Self {
        Self {
            words: [0; WORD_COUNT],
        }
    }

    /// Create an empty filter (all bits zero)
    pub fn new_empty() -> Self {
        Self::new()
    }

    /// Adopt an existing filter value
    ///
    /// `words` are the little-endian limbs of the value. Any bit set at or
    /// beyond `FILTER_SIZE` is rejected rather than truncated.
    pub fn from_value(words: [u64; WORD_COUNT]) -> Result<Self, FilterError> {
        if let Some(bit) = words.view_bits::<Lsb0>().last_one() {
            if bit >= FILTER_SIZE {
                return Err(FilterError::ValueOutOfRange {
                    bit,
                    max: FILTER_SIZE,
                });
            }
        }
        Ok(Self { words })
    }

    /// Adopt an existing filter value from a word slice of exactly `WORD_COUNT` words
    pub fn from_words_slice(slice: &[u64]) -> Result<Self, FilterError> {
        let words: [u64; WORD_COUNT] =
            slice.try_into().map_err(|_| FilterError::InvalidLength {
                len: slice.len(),
                expected: WORD_COUNT,
            })?;
        Self::from_value(words)
    }

    /// Add a name to the filter
    ///
    /// Adding a name twice leaves the filter unchanged after the first call.
    pub fn add(&mut self, name: &str) -> &mut Self {
        self.insert_positions(&hash_positions(name));
        self
    }

    /// Add a raw byte name to the filter
    pub fn add_bytes(&mut self, name: &[u8]) -> &mut Self {
        self.insert_positions(&hash_positions_bytes(name));
        self
    }

    /// Test if a name might have been added
    ///
    /// Returns:
    /// - `true` if the name might be in the set (could be a false positive)
    /// - `false` if the name was definitely never added
    pub fn contains(&self, name: &str) -> bool {
        self.contains_positions(&hash_positions(name))
    }

    /// Test if a raw byte name might have been added
    pub fn contains_bytes(&self, name: &[u8]) -> bool {
        self.contains_positions(&hash_positions_bytes(name))
    }

    /// Test if a name might have been added, without early exit
    ///
    /// Always reads all 7 positions and folds them with a bitwise AND, so the
    /// work done does not depend on which bits are set. Same answer as
    /// [`contains`](Self::contains).
    pub fn contains_constant_time(&self, name: &str) -> bool {
        let bits = self.bits();

        let mut result: u8 = 1;
        for &pos in &hash_positions(name) {
            result &= bits[pos] as u8;
        }

        result == 1
    }

    /// Current raw filter value as little-endian 64-bit limbs
    pub fn get_value(&self) -> &[u64; WORD_COUNT] {
        &self.words
    }

    /// Consume the filter, returning its raw value
    pub fn into_value(self) -> [u64; WORD_COUNT] {
        self.words
    }

    /// Merge another filter into this one (OR operation)
    ///
    /// Afterwards this filter contains every name either filter contained.
    pub fn merge(&mut self, other: &BloomNames) {
        for (word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= *other_word;
        }
    }

    /// Number of bits set
    pub fn bits_set(&self) -> usize {
        self.bits().count_ones()
    }

    /// Whether no bit is set
    pub fn is_empty(&self) -> bool {
        self.bits().not_any()
    }

    /// Whether bit `position` is set (always false past the filter width)
    pub fn bit(&self, position: usize) -> bool {
        position < FILTER_SIZE && self.bits()[position]
    }

    pub(crate) fn insert_positions(&mut self, positions: &Positions) {
        let bits = self.words.view_bits_mut::<Lsb0>();
        for &pos in positions {
            bits.set(pos, true);
        }
    }

    pub(crate) fn contains_positions(&self, positions: &Positions) -> bool {
        let bits = self.bits();
        positions.iter().all(|&pos| bits[pos])
    }

    fn bits(&self) -> &BitSlice<u64, Lsb0> {
        self.words.view_bits::<Lsb0>()
    }
}

impl Default for BloomNames {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BloomNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomNames")
            .field("bits_set", &self.bits_set())
            .field("bytes", &self.to_be_bytes().len())
            .finish()
    }
}

impl fmt::Display for BloomNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<S: AsRef<str>> Extend<S> for BloomNames {
    fn extend<I: IntoIterator<Item = S>>(&mut self, names: I) {
        for name in names {
            self.add(name.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for BloomNames {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        let mut filter = Self::new();
        filter.extend(names);
        filter
    }
}
