//! Listing and pagination options.
//!
//! These records are pure data: they perform no I/O. The query layer calls
//! `query_params` at submission time, which validates page-size bounds and
//! applies the documented defaults before encoding.
//!
//! Page-size policy is the same for every listing: zero (or a negative value
//! for signed limits) means "use the default", and anything above the ceiling
//! is rejected rather than clamped.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::TRACING_TARGET_LISTING;
use crate::error::{Result, to_invalid_argument};
use crate::types::SourceType;

/// The only delimiter with guaranteed grouping semantics.
pub const DEFAULT_DELIMITER: &str = "/";

/// Encoded query parameters, in submission order.
pub type QueryParams = Vec<(&'static str, String)>;

/// Where a paged object listing resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFrom<'a> {
    /// Resume at the exact position encoded by a previous page's cursor.
    Token(&'a str),
    /// Start with the first key strictly after this one.
    After(&'a str),
    /// Start from the first key.
    Beginning,
}

/// Options for listing the objects of a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListObjectsOptions {
    /// Include objects that have been marked as removed.
    pub show_removed_object: bool,

    /// Listing starts with the first object after this name.
    pub start_after: String,

    /// Cursor returned by a previous page. Takes precedence over
    /// `start_after` when both are set.
    pub continuation_token: String,

    /// Character used to group keys into common prefixes. Only `/` is
    /// guaranteed to group; other values are passed through unchanged.
    pub delimiter: String,

    /// Restricts results to keys beginning with this prefix.
    pub prefix: String,

    /// Maximum number of keys per page. Zero selects the default of 50;
    /// values above 1000 are rejected.
    #[validate(range(max = 1000))]
    pub max_keys: u64,
}

impl ListObjectsOptions {
    /// Page size used when `max_keys` is zero.
    pub const DEFAULT_MAX_KEYS: u64 = 50;
    /// Largest accepted `max_keys`.
    pub const MAX_KEYS_LIMIT: u64 = 1000;

    /// Creates options that list everything with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to keys with the given prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the grouping delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the exclusive start key.
    #[must_use]
    pub fn with_start_after(mut self, start_after: impl Into<String>) -> Self {
        self.start_after = start_after.into();
        self
    }

    /// Sets the continuation cursor from a previous page.
    #[must_use]
    pub fn with_continuation_token(mut self, token: impl Into<String>) -> Self {
        self.continuation_token = token.into();
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_max_keys(mut self, max_keys: u64) -> Self {
        self.max_keys = max_keys;
        self
    }

    /// Includes objects marked as removed.
    #[must_use]
    pub fn with_removed_objects(mut self, show: bool) -> Self {
        self.show_removed_object = show;
        self
    }

    /// Page size after applying the default for zero.
    pub fn effective_max_keys(&self) -> u64 {
        if self.max_keys == 0 {
            Self::DEFAULT_MAX_KEYS
        } else {
            self.max_keys
        }
    }

    /// Resume position, applying cursor-over-marker precedence.
    pub fn resume_from(&self) -> ResumeFrom<'_> {
        if !self.continuation_token.is_empty() {
            ResumeFrom::Token(&self.continuation_token)
        } else if !self.start_after.is_empty() {
            ResumeFrom::After(&self.start_after)
        } else {
            ResumeFrom::Beginning
        }
    }

    /// Checks the page-size ceiling.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|errors| {
            to_invalid_argument(format!(
                "max_keys {} exceeds the limit of {}",
                self.max_keys,
                Self::MAX_KEYS_LIMIT
            ))
            .with_source(errors)
        })
    }

    /// Validates the options and encodes them as query parameters.
    ///
    /// `start-after` is left out when a continuation token is present, and
    /// empty string fields are omitted.
    pub fn query_params(&self) -> Result<QueryParams> {
        self.validate()?;

        if !self.delimiter.is_empty() && self.delimiter != DEFAULT_DELIMITER {
            tracing::warn!(
                target: TRACING_TARGET_LISTING,
                delimiter = %self.delimiter,
                "Only '/' is guaranteed to group keys"
            );
        }

        let mut params = QueryParams::new();
        params.push(("max-keys", self.effective_max_keys().to_string()));
        match self.resume_from() {
            ResumeFrom::Token(token) => params.push(("continuation-token", token.to_owned())),
            ResumeFrom::After(key) => params.push(("start-after", key.to_owned())),
            ResumeFrom::Beginning => {}
        }
        if !self.delimiter.is_empty() {
            params.push(("delimiter", self.delimiter.clone()));
        }
        if !self.prefix.is_empty() {
            params.push(("prefix", self.prefix.clone()));
        }
        params.push(("include-removed", self.show_removed_object.to_string()));

        tracing::debug!(
            target: TRACING_TARGET_LISTING,
            max_keys = self.effective_max_keys(),
            prefix = %self.prefix,
            "Encoded object listing query"
        );
        Ok(params)
    }
}

/// Options for listing the read-quota records of a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListReadRecordOptions {
    /// Only records at or after this time (microseconds since the epoch).
    #[validate(range(min = 0))]
    pub start_timestamp: i64,

    /// Maximum records per page. Zero or negative selects the default of 100;
    /// values above 1000 are rejected.
    #[validate(range(max = 1000))]
    pub max_records: i64,
}

impl ListReadRecordOptions {
    /// Page size used when `max_records` is not positive.
    pub const DEFAULT_MAX_RECORDS: i64 = 100;
    /// Largest accepted `max_records`.
    pub const MAX_RECORDS_LIMIT: i64 = 1000;

    /// Creates options listing records from the given timestamp.
    pub fn new(start_timestamp: i64) -> Self {
        Self {
            start_timestamp,
            max_records: 0,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_max_records(mut self, max_records: i64) -> Self {
        self.max_records = max_records;
        self
    }

    /// Page size after applying the default.
    pub fn effective_max_records(&self) -> i64 {
        if self.max_records <= 0 {
            Self::DEFAULT_MAX_RECORDS
        } else {
            self.max_records
        }
    }

    /// Checks timestamp and page-size bounds.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|errors| {
            to_invalid_argument(format!(
                "invalid read record listing: start_timestamp={} max_records={} (limit {})",
                self.start_timestamp,
                self.max_records,
                Self::MAX_RECORDS_LIMIT
            ))
            .with_source(errors)
        })
    }

    /// Validates the options and encodes them as query parameters.
    pub fn query_params(&self) -> Result<QueryParams> {
        self.validate()?;

        Ok(vec![
            ("start-timestamp", self.start_timestamp.to_string()),
            ("max-records", self.effective_max_records().to_string()),
        ])
    }
}

/// Options for listing groups by name or prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListGroupsOptions {
    /// Restricts results to groups of one origin.
    pub source_type: Option<SourceType>,

    /// Maximum groups per page. Zero or negative selects the default of 50;
    /// values above 1000 are rejected.
    #[validate(range(max = 1000))]
    pub limit: i64,

    /// Number of groups to skip.
    #[validate(range(min = 0))]
    pub offset: i64,
}

impl ListGroupsOptions {
    /// Page size used when `limit` is not positive.
    pub const DEFAULT_LIMIT: i64 = 50;
    /// Largest accepted `limit`.
    pub const MAX_LIMIT: i64 = 1000;

    /// Creates options with default paging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one source type.
    #[must_use]
    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the number of groups to skip.
    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Page size after applying the default.
    pub fn effective_limit(&self) -> i64 {
        if self.limit <= 0 {
            Self::DEFAULT_LIMIT
        } else {
            self.limit
        }
    }

    /// Checks paging bounds.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|errors| {
            to_invalid_argument(format!(
                "invalid group listing: limit={} offset={} (limit must be at most {}, offset non-negative)",
                self.limit,
                self.offset,
                Self::MAX_LIMIT
            ))
            .with_source(errors)
        })
    }

    /// Validates the options and encodes them as query parameters.
    pub fn query_params(&self) -> Result<QueryParams> {
        self.validate()?;

        let mut params = QueryParams::new();
        if let Some(source_type) = self.source_type {
            params.push(("source-type", source_type.to_string()));
        }
        params.push(("limit", self.effective_limit().to_string()));
        params.push(("offset", self.offset.to_string()));
        Ok(params)
    }
}
