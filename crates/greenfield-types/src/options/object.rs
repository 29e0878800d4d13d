//! Object lifecycle options.

use std::sync::Arc;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_OPTIONS;
use crate::error::{Error, Result, to_invalid_argument};
use crate::tx::{TxOption, impl_transactional, tx_only_option};
use crate::types::{AccAddress, RedundancyType, Visibility, parse_addresses};

/// Content type assumed when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Options used to construct a create-object message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(
    name = "CreateObjectBuilder",
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    derive(Debug),
    build_fn(error = "Error")
)]
#[serde(default)]
pub struct CreateObjectOptions {
    /// Visibility of the new object.
    pub visibility: Visibility,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    #[builder(setter(custom))]
    pub tx_opts: Option<Arc<TxOption>>,
    /// Secondary storage providers that will hold replicas or shards.
    #[builder(setter(custom))]
    pub secondary_sp_accs: Vec<AccAddress>,
    /// MIME type of the payload. Empty means [`DEFAULT_CONTENT_TYPE`].
    pub content_type: String,
    /// Store full replicas instead of erasure-coded shards.
    pub is_replica_type: bool,
    /// Create the object in asynchronous mode.
    pub is_async_mode: bool,
}

impl CreateObjectOptions {
    /// Create a new configuration builder.
    pub fn builder() -> CreateObjectBuilder {
        CreateObjectBuilder::default()
    }

    /// Redundancy strategy selected by `is_replica_type`.
    #[inline]
    pub fn redundancy_type(&self) -> RedundancyType {
        RedundancyType::from_replica_flag(self.is_replica_type)
    }

    /// Content type, falling back to [`DEFAULT_CONTENT_TYPE`].
    pub fn content_type(&self) -> &str {
        if self.content_type.is_empty() {
            DEFAULT_CONTENT_TYPE
        } else {
            &self.content_type
        }
    }
}

impl CreateObjectBuilder {
    /// Sets the secondary storage providers from their hex addresses.
    pub fn with_secondary_sp_accs<I, S>(mut self, addresses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.secondary_sp_accs = Some(parse_addresses(addresses)?);
        Ok(self)
    }

    /// Attaches a transaction option handle.
    pub fn with_tx_opts(mut self, tx_opts: impl Into<Arc<TxOption>>) -> Self {
        self.tx_opts = Some(Some(tx_opts.into()));
        self
    }
}

/// Options for uploading an object's payload to its primary provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutObjectOptions {
    /// MIME type of the payload.
    pub content_type: String,
    /// Hash of the create-object transaction, hex encoded.
    pub txn_hash: String,
}

impl PutObjectOptions {
    /// Creates upload options with no content type or transaction hash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the create-object transaction hash, validating its hex encoding.
    pub fn with_txn_hash(mut self, txn_hash: &str) -> Result<Self> {
        let digits = txn_hash
            .strip_prefix("0x")
            .or_else(|| txn_hash.strip_prefix("0X"))
            .unwrap_or(txn_hash);

        if digits.is_empty() {
            return Err(to_invalid_argument("transaction hash cannot be empty"));
        }

        hex::decode(digits).map_err(|e| {
            tracing::debug!(
                target: TRACING_TARGET_OPTIONS,
                txn_hash = %txn_hash,
                error = %e,
                "Rejected transaction hash"
            );
            to_invalid_argument(format!("invalid transaction hash '{}': {}", txn_hash, e))
                .with_source(e)
        })?;

        self.txn_hash = digits.to_owned();
        Ok(self)
    }
}

/// Options used when a storage provider approves an object creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproveObjectOptions {
    /// Whether the object will be publicly readable.
    pub is_public: bool,
    /// Secondary storage providers selected for the object.
    pub secondary_sp_accs: Vec<AccAddress>,
}

impl ApproveObjectOptions {
    /// Creates approval options for a private object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the object as public.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Sets the secondary storage providers from their hex addresses.
    pub fn with_secondary_sp_accs<I, S>(mut self, addresses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.secondary_sp_accs = parse_addresses(addresses)?;
        Ok(self)
    }
}

impl_transactional!(CreateObjectOptions);

tx_only_option! {
    /// Options for updating an object's metadata.
    UpdateObjectOption;
    /// Options for cancelling an object that is still being created.
    CancelCreateOption;
    /// Options for deleting an object.
    DeleteObjectOption;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::Transactional;

    const SP_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const SP_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[test]
    fn create_defaults_to_erasure_coding() {
        let options = CreateObjectOptions::default();

        assert_eq!(options.redundancy_type(), RedundancyType::ErasureCode);
        assert_eq!(options.content_type(), DEFAULT_CONTENT_TYPE);
        assert_eq!(options.visibility, Visibility::Unspecified);
        assert!(options.secondary_sp_accs.is_empty());
    }

    #[test]
    fn create_builder() {
        let options = CreateObjectOptions::builder()
            .with_visibility(Visibility::Inherit)
            .with_content_type("image/png")
            .with_is_replica_type(true)
            .with_secondary_sp_accs([SP_A, SP_B])
            .expect("valid addresses")
            .with_tx_opts(TxOption::default())
            .build()
            .expect("valid options");

        assert_eq!(options.redundancy_type(), RedundancyType::Replica);
        assert_eq!(options.content_type(), "image/png");
        assert_eq!(options.secondary_sp_accs.len(), 2);
        assert!(options.tx_opts().is_some());
    }

    #[test]
    fn create_serde_round_trip_skips_tx_opts() {
        let options = CreateObjectOptions::builder()
            .with_content_type("text/plain")
            .with_secondary_sp_accs([SP_A])
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&options).unwrap();
        let decoded: CreateObjectOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, options);

        let with_tx = options.clone().with_tx_opts(TxOption::default());
        assert_ne!(with_tx, options);
        assert_eq!(serde_json::to_string(&with_tx).unwrap(), json);
    }

    #[test]
    fn create_rejects_bad_secondary_address() {
        let err = CreateObjectOptions::builder()
            .with_secondary_sp_accs([SP_A, "0x123"])
            .unwrap_err();

        assert!(err.is_invalid_argument());
    }

    #[test]
    fn put_object_txn_hash() {
        let hash = "0x".to_owned() + &"ab".repeat(32);
        let options = PutObjectOptions::new()
            .with_content_type("text/plain")
            .with_txn_hash(&hash)
            .unwrap();

        assert_eq!(options.txn_hash, "ab".repeat(32));
        assert_eq!(options.content_type, "text/plain");

        assert!(PutObjectOptions::new().with_txn_hash("0xzz").is_err());
        assert!(PutObjectOptions::new().with_txn_hash("0x").is_err());
    }

    #[test]
    fn approve_object_options() {
        let options = ApproveObjectOptions::new()
            .public()
            .with_secondary_sp_accs(vec![SP_A.to_owned()])
            .unwrap();

        assert!(options.is_public);
        assert_eq!(options.secondary_sp_accs[0].to_string(), SP_A);
    }

    #[test]
    fn tx_only_object_records() {
        assert!(UpdateObjectOption::new().tx_opts().is_none());
        assert!(CancelCreateOption::new().tx_opts().is_none());
        assert!(
            DeleteObjectOption::new()
                .with_tx_opts(TxOption::default())
                .tx_opts()
                .is_some()
        );
    }
}
