//! Bucket lifecycle options.

use std::sync::Arc;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tx::{TxOption, impl_transactional, tx_only_option};
use crate::types::{AccAddress, Visibility};

/// Options used to construct a create-bucket message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(
    name = "CreateBucketBuilder",
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    derive(Debug),
    build_fn(error = "Error")
)]
#[serde(default)]
pub struct CreateBucketOptions {
    /// Visibility of the new bucket.
    pub visibility: Visibility,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    #[builder(setter(custom))]
    pub tx_opts: Option<Arc<TxOption>>,
    /// Account that pays for storage and bandwidth. Defaults to the creator.
    #[builder(setter(custom))]
    pub payment_address: Option<AccAddress>,
    /// Read quota charged to the bucket, in bytes.
    pub charged_quota: u64,
    /// Create the bucket in asynchronous mode.
    pub is_async_mode: bool,
}

impl CreateBucketOptions {
    /// Create a new configuration builder.
    pub fn builder() -> CreateBucketBuilder {
        CreateBucketBuilder::default()
    }

    /// Sets the payment address from its hex encoding.
    pub fn with_payment_address(mut self, address: &str) -> Result<Self> {
        self.payment_address = Some(address.parse()?);
        Ok(self)
    }
}

impl CreateBucketBuilder {
    /// Sets the payment address from its hex encoding.
    pub fn with_payment_address(mut self, address: &str) -> Result<Self> {
        self.payment_address = Some(Some(address.parse()?));
        Ok(self)
    }

    /// Attaches a transaction option handle.
    pub fn with_tx_opts(mut self, tx_opts: impl Into<Arc<TxOption>>) -> Self {
        self.tx_opts = Some(Some(tx_opts.into()));
        self
    }
}

/// Options used to construct an update-bucket message.
///
/// Every field is optional: `None` leaves the on-chain value untouched, which
/// keeps "not specified" distinct from an explicit zero quota or an explicit
/// visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateBucketOptions {
    /// New visibility, if changing.
    pub visibility: Option<Visibility>,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    pub tx_opts: Option<Arc<TxOption>>,
    /// New payment address, if changing.
    pub payment_address: Option<AccAddress>,
    /// New charged read quota, if changing. `Some(0)` clears the quota.
    pub charged_quota: Option<u64>,
}

impl UpdateBucketOptions {
    /// Creates options that change nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Changes the payment address, validating its hex encoding.
    pub fn with_payment_address(mut self, address: &str) -> Result<Self> {
        self.payment_address = Some(address.parse()?);
        Ok(self)
    }

    /// Changes the charged read quota.
    #[must_use]
    pub fn with_charged_quota(mut self, quota: u64) -> Self {
        self.charged_quota = Some(quota);
        self
    }

    /// Returns whether no field was set.
    pub fn is_empty(&self) -> bool {
        self.visibility.is_none() && self.payment_address.is_none() && self.charged_quota.is_none()
    }
}

/// Options used when approving a bucket creation on the storage provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproveBucketOptions {
    /// Whether the bucket will be publicly readable.
    pub is_public: bool,
    /// Account that pays for the bucket.
    pub payment_address: Option<AccAddress>,
}

impl ApproveBucketOptions {
    /// Creates approval options for a private bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the bucket as public.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Sets the payment address from its hex encoding.
    pub fn with_payment_address(mut self, address: &str) -> Result<Self> {
        self.payment_address = Some(address.parse()?);
        Ok(self)
    }
}

impl_transactional!(CreateBucketOptions, UpdateBucketOptions);

tx_only_option! {
    /// Options for deleting a bucket.
    DeleteBucketOption;
    /// Options for changing a bucket's payment account.
    UpdatePaymentOption;
    /// Options for buying read quota for a bucket.
    BuyQuotaOption;
    /// Options for changing a bucket's visibility.
    UpdateVisibilityOption;
}
