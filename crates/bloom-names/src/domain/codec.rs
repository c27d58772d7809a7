//! Integer encodings of the filter value
//!
//! The whole filter state is one non-negative integer below 2^30000, bit `p`
//! of the integer being filter bit `p`. Every encoding here carries exactly
//! that integer so filters stay interchangeable with other implementations:
//!
//! - little-endian bytes, fixed width (`VALUE_BYTES`)
//! - big-endian bytes, minimal (no leading zero bytes, empty for 0)
//! - hexadecimal text, minimal lowercase (`"0"` for 0)
//!
//! Decoders accept any width and reject values with a bit at or beyond
//! `FILTER_SIZE`.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::bloom_names::BloomNames;
use super::{FILTER_SIZE, VALUE_BYTES, WORD_COUNT};
use crate::error::FilterError;

impl BloomNames {
    /// Encode the value as `VALUE_BYTES` little-endian bytes
    ///
    /// Byte `p / 8`, bit `p % 8` holds filter bit `p`.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.get_value()
            .iter()
            .flat_map(|word| word.to_le_bytes())
            .take(VALUE_BYTES)
            .collect()
    }

    /// Encode the value as minimal big-endian bytes
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_le_bytes();
        let significant = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        bytes.truncate(significant);
        bytes.reverse();
        bytes
    }

    /// Encode the value as minimal lowercase hex text, without prefix
    pub fn to_hex(&self) -> String {
        let digits = hex::encode(self.to_be_bytes());
        match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        }
    }

    /// Decode a value from little-endian bytes of any width
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        if let Some(bit) = highest_bit_le(bytes) {
            if bit >= FILTER_SIZE {
                return Err(FilterError::ValueOutOfRange {
                    bit,
                    max: FILTER_SIZE,
                });
            }
        }

        let mut words = [0u64; WORD_COUNT];
        for (i, &byte) in bytes.iter().take(VALUE_BYTES).enumerate() {
            words[i / 8] |= u64::from(byte) << (8 * (i % 8));
        }
        Self::from_value(words)
    }

    /// Decode a value from big-endian bytes of any width
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        let le: Vec<u8> = bytes.iter().rev().copied().collect();
        Self::from_le_bytes(&le)
    }

    /// Decode a value from hex text
    ///
    /// Accepts an optional `0x` prefix, a trailing `L` (Python 2 long
    /// literals), either case and leading zeros.
    pub fn from_hex(text: &str) -> Result<Self, FilterError> {
        let text = text.trim();
        let text = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let text = text
            .strip_suffix('L')
            .or_else(|| text.strip_suffix('l'))
            .unwrap_or(text);

        if text.is_empty() {
            return Err(FilterError::InvalidHex("empty value".to_string()));
        }

        let digits = if text.len() % 2 == 1 {
            format!("0{}", text)
        } else {
            text.to_string()
        };
        let bytes = hex::decode(digits).map_err(|e| FilterError::InvalidHex(e.to_string()))?;

        Self::from_be_bytes(&bytes)
    }

    /// Serialize the filter to bytes (bincode)
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        bincode::serialize(self).map_err(|e| FilterError::SerializationError(e.to_string()))
    }

    /// Deserialize a filter from bytes (bincode)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        bincode::deserialize(bytes).map_err(|e| FilterError::SerializationError(e.to_string()))
    }
}

/// Index of the highest set bit of a little-endian integer
fn highest_bit_le(bytes: &[u8]) -> Option<usize> {
    let index = bytes.iter().rposition(|&b| b != 0)?;
    let top = 7 - bytes[index].leading_zeros() as usize;
    Some(index * 8 + top)
}

/// Human-readable formats carry the hex text, binary formats the
/// fixed-width little-endian bytes.
impl Serialize for BloomNames {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.to_le_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for BloomNames {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(ValueVisitor)
        } else {
            deserializer.deserialize_bytes(ValueVisitor)
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = BloomNames;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex string or little-endian bytes below 2^30000")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        BloomNames::from_hex(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        BloomNames::from_le_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(VALUE_BYTES));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        BloomNames::from_le_bytes(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> BloomNames {
        let mut filter = BloomNames::new();
        filter.add("alice");
        filter
    }

    #[test]
    fn test_empty_encodings() {
        let filter = BloomNames::new();

        assert_eq!(filter.to_le_bytes(), vec![0u8; VALUE_BYTES]);
        assert!(filter.to_be_bytes().is_empty());
        assert_eq!(filter.to_hex(), "0");
        assert_eq!(filter.to_string(), "0");
    }

    #[test]
    fn test_le_bytes_bit_mapping() {
        let bytes = alice().to_le_bytes();

        assert_eq!(bytes.len(), VALUE_BYTES);
        // 3619 = 452 * 8 + 3
        assert_eq!(bytes[452], 1 << 3);
        // 22654 = 2831 * 8 + 6
        assert_eq!(bytes[2831], 1 << 6);
    }

    #[test]
    fn test_be_bytes_are_minimal() {
        let bytes = alice().to_be_bytes();

        assert_eq!(bytes.len(), 2832);
        assert_eq!(bytes[0], 1 << 6, "Most significant byte holds bit 22654");
    }

    #[test]
    fn test_hex_matches_big_integer_text() {
        let hex = alice().to_hex();

        // Highest bit 22654 is bit 2 of the leading digit
        assert_eq!(hex.len(), 5664);
        assert!(hex.starts_with('4'));
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_round_trips() {
        let mut filter = alice();
        filter.add("bob").add("");

        assert_eq!(BloomNames::from_le_bytes(&filter.to_le_bytes()).unwrap(), filter);
        assert_eq!(BloomNames::from_be_bytes(&filter.to_be_bytes()).unwrap(), filter);
        assert_eq!(BloomNames::from_hex(&filter.to_hex()).unwrap(), filter);
        assert_eq!(BloomNames::from_bytes(&filter.to_bytes().unwrap()).unwrap(), filter);
    }

    #[test]
    fn test_from_hex_accepts_python_long_literals() {
        let filter = alice();
        let literal = format!("0x{}L", filter.to_hex());
        assert_eq!(BloomNames::from_hex(&literal).unwrap(), filter);

        let upper = filter.to_hex().to_uppercase();
        assert_eq!(BloomNames::from_hex(&upper).unwrap(), filter);

        let padded = format!("000{}", filter.to_hex());
        assert_eq!(BloomNames::from_hex(&padded).unwrap(), filter);

        assert!(BloomNames::from_hex("0").unwrap().is_empty());
        assert!(BloomNames::from_hex("0x0L").unwrap().is_empty());
    }

    #[test]
    fn test_from_hex_rejects_malformed_text() {
        assert!(matches!(BloomNames::from_hex(""), Err(FilterError::InvalidHex(_))));
        assert!(matches!(BloomNames::from_hex("0x"), Err(FilterError::InvalidHex(_))));
        assert!(matches!(BloomNames::from_hex("12g4"), Err(FilterError::InvalidHex(_))));
        assert!(matches!(BloomNames::from_hex("-1"), Err(FilterError::InvalidHex(_))));
    }

    #[test]
    fn test_decoders_reject_out_of_range_values() {
        // 2^30000: bit 30000 is byte 3750, bit 0
        let mut le = vec![0u8; VALUE_BYTES + 1];
        le[VALUE_BYTES] = 1;
        assert_eq!(
            BloomNames::from_le_bytes(&le),
            Err(FilterError::ValueOutOfRange {
                bit: FILTER_SIZE,
                max: FILTER_SIZE
            })
        );

        let be: Vec<u8> = le.iter().rev().copied().collect();
        assert!(matches!(
            BloomNames::from_be_bytes(&be),
            Err(FilterError::ValueOutOfRange { .. })
        ));

        let hex = format!("1{}", "0".repeat(7500));
        assert!(matches!(
            BloomNames::from_hex(&hex),
            Err(FilterError::ValueOutOfRange { bit: 30000, .. })
        ));
    }

    #[test]
    fn test_decoders_accept_zero_excess_bytes() {
        let filter = alice();

        let mut le = filter.to_le_bytes();
        le.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(BloomNames::from_le_bytes(&le).unwrap(), filter);

        // Highest representable bit
        let hex = format!("8{}", "0".repeat(7499));
        let top = BloomNames::from_hex(&hex).unwrap();
        assert!(top.bit(FILTER_SIZE - 1));
        assert_eq!(top.bits_set(), 1);
    }

    #[test]
    fn test_json_carries_hex_text() {
        let filter = alice();
        let json = serde_json::to_string(&filter).unwrap();

        assert_eq!(json, format!("\"{}\"", filter.to_hex()));
        assert_eq!(serde_json::from_str::<BloomNames>(&json).unwrap(), filter);
    }

    #[test]
    fn test_json_rejects_out_of_range_value() {
        let json = format!("\"1{}\"", "0".repeat(7500));
        assert!(serde_json::from_str::<BloomNames>(&json).is_err());
    }

    #[test]
    fn test_bincode_carries_fixed_width_bytes() {
        let bytes = alice().to_bytes().unwrap();
        // u64 length prefix + fixed-width value
        assert_eq!(bytes.len(), 8 + VALUE_BYTES);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            BloomNames::from_bytes(&[1, 2, 3]),
            Err(FilterError::SerializationError(_))
        ));
    }
}
