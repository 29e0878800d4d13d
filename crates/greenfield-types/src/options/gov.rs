//! Governance proposal options.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, to_invalid_argument};
use crate::tx::{TxOption, impl_transactional};

/// Longest accepted proposal or vote metadata.
pub const MAX_METADATA_LEN: usize = 255;

fn check_metadata<T: Validate>(record: &T, what: &str) -> Result<()> {
    record.validate().map_err(|errors| {
        to_invalid_argument(format!(
            "{} metadata must be at most {} characters",
            what, MAX_METADATA_LEN
        ))
        .with_source(errors)
    })
}

/// Options for submitting a governance proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitProposalOptions {
    /// Free-form proposal metadata.
    #[validate(length(max = 255))]
    pub metadata: String,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    pub tx_opts: Option<Arc<TxOption>>,
}

impl SubmitProposalOptions {
    /// Creates options with empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metadata, rejecting values that are too long.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Result<Self> {
        self.metadata = metadata.into();
        self.validate()?;
        Ok(self)
    }

    /// Checks the metadata length.
    pub fn validate(&self) -> Result<()> {
        check_metadata(self, "proposal")
    }
}

/// Options for voting on a governance proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VoteProposalOptions {
    /// Free-form vote metadata.
    #[validate(length(max = 255))]
    pub metadata: String,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    pub tx_opts: Option<Arc<TxOption>>,
}

impl VoteProposalOptions {
    /// Creates options with empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metadata, rejecting values that are too long.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Result<Self> {
        self.metadata = metadata.into();
        self.validate()?;
        Ok(self)
    }

    /// Checks the metadata length.
    pub fn validate(&self) -> Result<()> {
        check_metadata(self, "vote")
    }
}

impl_transactional!(SubmitProposalOptions, VoteProposalOptions);
