//! Storage provider registration options.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use derive_builder::Builder;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_OPTIONS;
use crate::error::{Error, Result, to_invalid_argument};
use crate::tx::{TxOption, impl_transactional};

/// Options for proposing a new storage provider.
///
/// Prices must not be negative. The builder and deserialization both check
/// this; records assembled by hand can be checked with [`validate`](Self::validate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(
    name = "CreateStorageProviderBuilder",
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    derive(Debug),
    build_fn(private, name = "build_unchecked", error = "Error")
)]
#[serde(try_from = "StorageProviderFields")]
pub struct CreateStorageProviderOptions {
    /// Price per byte per second of read quota.
    pub read_price: BigDecimal,
    /// Read quota granted to every bucket for free, in bytes.
    pub free_read_quota: u64,
    /// Price per byte per second of storage.
    pub store_price: BigDecimal,
    /// Deposit attached to the registration proposal, in wei.
    pub proposal_deposit_amount: u128,
    /// Title of the registration proposal.
    pub proposal_title: String,
    /// Summary of the registration proposal.
    pub proposal_summary: String,
    /// Metadata of the registration proposal.
    pub proposal_meta_data: String,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    #[builder(setter(custom))]
    pub tx_opts: Option<Arc<TxOption>>,
}

impl CreateStorageProviderOptions {
    /// Create a new configuration builder.
    pub fn builder() -> CreateStorageProviderBuilder {
        CreateStorageProviderBuilder::default()
    }

    /// Checks that neither price is negative.
    pub fn validate(&self) -> Result<()> {
        check_price("read_price", &self.read_price)?;
        check_price("store_price", &self.store_price)?;
        Ok(())
    }
}

impl CreateStorageProviderBuilder {
    /// Attaches a transaction option handle.
    pub fn with_tx_opts(mut self, tx_opts: impl Into<Arc<TxOption>>) -> Self {
        self.tx_opts = Some(Some(tx_opts.into()));
        self
    }

    /// Builds the options, rejecting negative prices.
    pub fn build(self) -> Result<CreateStorageProviderOptions> {
        let options = self.build_unchecked()?;
        options.validate()?;
        Ok(options)
    }
}

/// Wire form of [`CreateStorageProviderOptions`], validated on conversion.
#[derive(Deserialize, Default)]
#[serde(default)]
struct StorageProviderFields {
    read_price: BigDecimal,
    free_read_quota: u64,
    store_price: BigDecimal,
    proposal_deposit_amount: u128,
    proposal_title: String,
    proposal_summary: String,
    proposal_meta_data: String,
}

impl TryFrom<StorageProviderFields> for CreateStorageProviderOptions {
    type Error = Error;

    fn try_from(fields: StorageProviderFields) -> Result<Self> {
        let options = Self {
            read_price: fields.read_price,
            free_read_quota: fields.free_read_quota,
            store_price: fields.store_price,
            proposal_deposit_amount: fields.proposal_deposit_amount,
            proposal_title: fields.proposal_title,
            proposal_summary: fields.proposal_summary,
            proposal_meta_data: fields.proposal_meta_data,
            tx_opts: None,
        };
        options.validate()?;
        Ok(options)
    }
}

fn check_price(field: &str, price: &BigDecimal) -> Result<()> {
    if *price < BigDecimal::from(0) {
        tracing::debug!(
            target: TRACING_TARGET_OPTIONS,
            field,
            price = %price,
            "Rejected negative price"
        );
        return Err(to_invalid_argument(format!(
            "{} must not be negative, got {}",
            field, price
        )));
    }
    Ok(())
}

/// Options for granting a storage provider permission to spend the deposit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantDepositForStorageProviderOptions {
    /// When the grant expires. `None` means it never does.
    pub expiration: Option<Timestamp>,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    pub tx_opts: Option<Arc<TxOption>>,
}

impl GrantDepositForStorageProviderOptions {
    /// Creates a grant that never expires.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grant expiry time.
    #[must_use]
    pub fn with_expiration(mut self, expiration: Timestamp) -> Self {
        self.expiration = Some(expiration);
        self
    }
}

impl_transactional!(CreateStorageProviderOptions, GrantDepositForStorageProviderOptions);
