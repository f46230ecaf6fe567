//! Exchange-format codec for [`BitRange`].
//!
//! A serialized bitrange is a self-describing structured record carrying the
//! raw storage plus the counters needed for exact reconstruction:
//!
//! ```json
//! {
//!   "words": [0, 9223372036854775808],
//!   "tail": 1,
//!   "tail_bit_count": 2,
//!   "set_count": 2,
//!   "capacity": 130
//! }
//! ```
//!
//! The field names above are stable. Decoding always routes through
//! [`BitRange::from_parts`], so a structurally valid record with inconsistent
//! contents (capacity mismatch, unmasked tail bits, wrong `set_count`) is
//! rejected rather than reconstructed.

use serde::{Deserialize, Serialize};

use bitrange_common::{Result, error::Error};

use crate::bit_range::BitRange;

/// Wire shape of a serialized bitrange.
#[derive(Serialize, Deserialize)]
struct BitRangeRecord {
    words: Vec<u64>,
    tail: u64,
    tail_bit_count: u32,
    set_count: u64,
    capacity: u64,
}

impl From<&BitRange> for BitRangeRecord {
    fn from(range: &BitRange) -> BitRangeRecord {
        BitRangeRecord {
            words: range.words().to_vec(),
            tail: range.tail(),
            tail_bit_count: range.tail_bit_count(),
            set_count: range.set_count(),
            capacity: range.capacity(),
        }
    }
}

impl TryFrom<BitRangeRecord> for BitRange {
    type Error = Error;

    fn try_from(record: BitRangeRecord) -> Result<BitRange> {
        BitRange::from_parts(
            record.words,
            record.tail,
            record.tail_bit_count,
            record.set_count,
            record.capacity,
        )
    }
}

impl Serialize for BitRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        BitRangeRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BitRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<BitRange, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let record = BitRangeRecord::deserialize(deserializer)?;
        BitRange::try_from(record).map_err(serde::de::Error::custom)
    }
}

impl BitRange {
    /// Encodes this bitrange as a JSON exchange record.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::malformed_data(e.to_string()))
    }

    /// Decodes a bitrange from a JSON exchange record.
    ///
    /// # Errors
    ///
    /// Fails with `MalformedData` when the input is not valid JSON, does not
    /// have the record shape, or carries internally inconsistent storage (see
    /// [`BitRange::from_parts`]).
    pub fn from_json(data: &[u8]) -> Result<BitRange> {
        serde_json::from_slice(data).map_err(|e| Error::malformed_data(e.to_string()))
    }
}
