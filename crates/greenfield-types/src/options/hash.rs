//! Content-hash computation options.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result, to_invalid_argument};

/// Redundancy parameters used when computing an object's integrity hashes.
///
/// The payload is split into segments of `segment_size` bytes, and each
/// segment is erasure-coded into `data_shards + parity_shards` pieces.
///
/// Deserialized values go through the same checks as [`new`](Self::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(try_from = "HashFields")]
pub struct ComputeHashOptions {
    /// Segment size in bytes.
    #[validate(range(min = 1))]
    pub segment_size: u64,
    /// Number of data shards per segment.
    #[validate(range(min = 1))]
    pub data_shards: u32,
    /// Number of parity shards per segment.
    #[validate(range(min = 1))]
    pub parity_shards: u32,
}

impl ComputeHashOptions {
    /// Default segment size (16 MiB).
    pub const DEFAULT_SEGMENT_SIZE: u64 = 16 * 1024 * 1024;
    /// Default number of data shards.
    pub const DEFAULT_DATA_SHARDS: u32 = 4;
    /// Default number of parity shards.
    pub const DEFAULT_PARITY_SHARDS: u32 = 2;
    /// Upper bound on data plus parity shards supported by the encoder.
    pub const MAX_TOTAL_SHARDS: u32 = 256;

    /// Creates validated options.
    pub fn new(segment_size: u64, data_shards: u32, parity_shards: u32) -> Result<Self> {
        let options = Self {
            segment_size,
            data_shards,
            parity_shards,
        };
        options.validate()?;
        Ok(options)
    }

    /// Total number of pieces each segment is encoded into.
    #[inline]
    pub fn total_shards(&self) -> u32 {
        self.data_shards.saturating_add(self.parity_shards)
    }

    /// Checks that every parameter is non-zero and the shard count fits the encoder.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|errors| {
            to_invalid_argument(format!(
                "invalid redundancy parameters: segment_size={} data_shards={} parity_shards={}",
                self.segment_size, self.data_shards, self.parity_shards
            ))
            .with_source(errors)
        })?;

        if self.total_shards() > Self::MAX_TOTAL_SHARDS {
            return Err(to_invalid_argument(format!(
                "data_shards + parity_shards must not exceed {}, got {}",
                Self::MAX_TOTAL_SHARDS,
                self.total_shards()
            )));
        }

        Ok(())
    }
}

/// Wire form of [`ComputeHashOptions`], validated on conversion.
#[derive(Deserialize)]
struct HashFields {
    segment_size: u64,
    data_shards: u32,
    parity_shards: u32,
}

impl TryFrom<HashFields> for ComputeHashOptions {
    type Error = Error;

    fn try_from(fields: HashFields) -> Result<Self> {
        Self::new(fields.segment_size, fields.data_shards, fields.parity_shards)
    }
}

impl Default for ComputeHashOptions {
    fn default() -> Self {
        Self {
            segment_size: Self::DEFAULT_SEGMENT_SIZE,
            data_shards: Self::DEFAULT_DATA_SHARDS,
            parity_shards: Self::DEFAULT_PARITY_SHARDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = ComputeHashOptions::default();

        assert_eq!(options.segment_size, 16 * 1024 * 1024);
        assert_eq!(options.total_shards(), 6);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_zero_parameters() {
        assert!(ComputeHashOptions::new(0, 4, 2).is_err());
        assert!(ComputeHashOptions::new(1024, 0, 2).is_err());

        let err = ComputeHashOptions::new(1024, 4, 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn deserialization_validates() {
        let err = serde_json::from_str::<ComputeHashOptions>(
            r#"{"segment_size":0,"data_shards":0,"parity_shards":0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("segment_size=0"));

        assert!(
            serde_json::from_str::<ComputeHashOptions>(
                r#"{"segment_size":1024,"data_shards":255,"parity_shards":2}"#
            )
            .is_err()
        );

        let options: ComputeHashOptions = serde_json::from_str(
            r#"{"segment_size":1048576,"data_shards":6,"parity_shards":3}"#,
        )
        .unwrap();
        assert_eq!(options.total_shards(), 9);
    }

    #[test]
    fn rejects_too_many_shards() {
        let err = ComputeHashOptions::new(1024, 200, 100).unwrap_err();

        assert!(err.message().contains("300"));
    }
}
