//! Crate-level defaults for seeding option records.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_OPTIONS;
use crate::error::Result;
use crate::options::{
    ComputeHashOptions, CreateBucketOptions, CreateObjectOptions, DEFAULT_CONTENT_TYPE,
};
use crate::types::Visibility;

/// Defaults applied when creating buckets and objects.
///
/// Every field is optional; unset fields fall back to the protocol defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(default)]
pub struct OptionsConfig {
    /// Content type used for uploads that do not specify one
    #[cfg_attr(
        feature = "config",
        arg(long = "default-content-type", env = "GREENFIELD_DEFAULT_CONTENT_TYPE")
    )]
    pub default_content_type: Option<String>,

    /// Default visibility for new buckets and objects
    #[cfg_attr(
        feature = "config",
        arg(long = "default-visibility", env = "GREENFIELD_DEFAULT_VISIBILITY")
    )]
    pub default_visibility: Option<Visibility>,

    /// Create buckets and objects in asynchronous mode
    #[cfg_attr(feature = "config", arg(long = "async-mode", env = "GREENFIELD_ASYNC_MODE"))]
    pub async_mode: Option<bool>,

    /// Segment size in bytes used for integrity hashing
    #[cfg_attr(feature = "config", arg(long = "segment-size", env = "GREENFIELD_SEGMENT_SIZE"))]
    pub segment_size: Option<u64>,

    /// Number of erasure-coding data shards
    #[cfg_attr(feature = "config", arg(long = "data-shards", env = "GREENFIELD_DATA_SHARDS"))]
    pub data_shards: Option<u32>,

    /// Number of erasure-coding parity shards
    #[cfg_attr(feature = "config", arg(long = "parity-shards", env = "GREENFIELD_PARITY_SHARDS"))]
    pub parity_shards: Option<u32>,
}

impl OptionsConfig {
    /// Creates a configuration that uses every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the default content type.
    #[inline]
    pub fn content_type(&self) -> &str {
        self.default_content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Returns the default visibility.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.default_visibility.unwrap_or_default()
    }

    /// Returns whether creation runs in asynchronous mode.
    #[inline]
    pub fn is_async_mode(&self) -> bool {
        self.async_mode.unwrap_or(false)
    }

    /// Set the default content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.default_content_type = Some(content_type.into());
        self
    }

    /// Set the default visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.default_visibility = Some(visibility);
        self
    }

    /// Set asynchronous creation mode.
    #[must_use]
    pub fn with_async_mode(mut self, async_mode: bool) -> Self {
        self.async_mode = Some(async_mode);
        self
    }

    /// Set the redundancy parameters.
    #[must_use]
    pub fn with_redundancy(
        mut self,
        segment_size: u64,
        data_shards: u32,
        parity_shards: u32,
    ) -> Self {
        self.segment_size = Some(segment_size);
        self.data_shards = Some(data_shards);
        self.parity_shards = Some(parity_shards);
        self
    }

    /// Returns validated hashing options.
    pub fn compute_hash_options(&self) -> Result<ComputeHashOptions> {
        let options = ComputeHashOptions::new(
            self.segment_size.unwrap_or(ComputeHashOptions::DEFAULT_SEGMENT_SIZE),
            self.data_shards.unwrap_or(ComputeHashOptions::DEFAULT_DATA_SHARDS),
            self.parity_shards.unwrap_or(ComputeHashOptions::DEFAULT_PARITY_SHARDS),
        )?;

        tracing::debug!(
            target: TRACING_TARGET_OPTIONS,
            segment_size = options.segment_size,
            data_shards = options.data_shards,
            parity_shards = options.parity_shards,
            "Resolved hashing options"
        );

        Ok(options)
    }

    /// Returns create-bucket options seeded with these defaults.
    pub fn create_bucket_options(&self) -> CreateBucketOptions {
        CreateBucketOptions {
            visibility: self.visibility(),
            is_async_mode: self.is_async_mode(),
            ..CreateBucketOptions::default()
        }
    }

    /// Returns create-object options seeded with these defaults.
    pub fn create_object_options(&self) -> CreateObjectOptions {
        CreateObjectOptions {
            visibility: self.visibility(),
            content_type: self.content_type().to_owned(),
            is_async_mode: self.is_async_mode(),
            ..CreateObjectOptions::default()
        }
    }
}
