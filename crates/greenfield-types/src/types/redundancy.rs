//! Redundancy strategy applied to stored objects.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Data-protection scheme for an object's payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumString)]
pub enum RedundancyType {
    /// Payload is split into data and parity shards.
    #[default]
    #[serde(rename = "REDUNDANCY_EC_TYPE")]
    #[strum(serialize = "REDUNDANCY_EC_TYPE")]
    ErasureCode,
    /// Full copies are stored on every secondary provider.
    #[serde(rename = "REDUNDANCY_REPLICA_TYPE")]
    #[strum(serialize = "REDUNDANCY_REPLICA_TYPE")]
    Replica,
}

impl RedundancyType {
    /// Maps the `is_replica_type` flag used by object options.
    #[inline]
    pub fn from_replica_flag(is_replica: bool) -> Self {
        if is_replica { Self::Replica } else { Self::ErasureCode }
    }

    /// Returns the protocol enum value.
    pub fn as_i32(&self) -> i32 {
        match self {
            RedundancyType::ErasureCode => 0,
            RedundancyType::Replica => 1,
        }
    }
}
