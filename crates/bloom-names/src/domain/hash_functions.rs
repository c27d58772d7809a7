//! Hash position derivation for the name filter
//!
//! Seven bit positions are cut out of a single SHA-1 digest: the digest is
//! read as 40 hex digits, the first 35 are split into seven 5-digit chunks,
//! and each chunk (a 20-bit value) is reduced modulo the filter width.
//!
//! The last 5 digits are never used and repeated positions are not
//! deduplicated. Both are part of the on-disk contract: filters persisted by
//! earlier implementations of this scheme must keep answering the same way.

use sha1::{Digest, Sha1};

use super::{CHUNK_HEX_DIGITS, FILTER_SIZE, HASH_COUNT};

/// Bit positions for a name, in chunk order
pub type Positions = [usize; HASH_COUNT];

/// Compute the bit positions for a name, hashed as UTF-8
pub fn hash_positions(name: &str) -> Positions {
    hash_positions_bytes(name.as_bytes())
}

/// Compute the bit positions for a raw byte name
pub fn hash_positions_bytes(name: &[u8]) -> Positions {
    let digest = Sha1::digest(name);
    let mut positions = [0usize; HASH_COUNT];

    for (i, position) in positions.iter_mut().enumerate() {
        let first = i * CHUNK_HEX_DIGITS;
        let chunk = (first..first + CHUNK_HEX_DIGITS)
            .fold(0u32, |acc, digit| (acc << 4) | hex_digit(&digest, digit));
        *position = chunk as usize % FILTER_SIZE;
    }

    positions
}

/// Lowercase hex SHA-1 digest of a name, the string the chunks are cut from
pub fn hex_digest(name: &str) -> String {
    hex::encode(Sha1::digest(name.as_bytes()))
}

/// Value of the `index`-th hex digit of a digest (high nibble first)
fn hex_digit(digest: &[u8], index: usize) -> u32 {
    let byte = digest[index / 2];
    let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };
    u32::from(nibble)
}
