//! Partial object retrieval.
//!
//! [`GetObjectOption`] carries an optional HTTP byte-range expression. The
//! expression is derived from numeric bounds by [`GetObjectOption::set_range`]
//! and is either empty (fetch the whole object) or a validated
//! `bytes=<start>-<end>` / `bytes=<start>-` string.

use serde::Serialize;

use crate::TRACING_TARGET_RANGE;
use crate::error::{Result, to_invalid_argument};

/// Name of the header the range expression is sent in.
pub const RANGE_HEADER: &str = "Range";

/// Options for downloading an object.
///
/// Only [`set_range`](Self::set_range) can populate the range, so the type is
/// serializable for logging but not deserializable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetObjectOption {
    #[serde(skip_serializing_if = "String::is_empty")]
    range: String,
}

impl GetObjectOption {
    /// Creates an option that fetches the whole object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the byte range to download.
    ///
    /// - `start > 0` with `end == 0` requests everything from `start` onwards.
    /// - `0 <= start <= end` requests the inclusive range `start..=end`.
    ///   `(0, 0)` therefore asks for the first byte only; leave the range unset
    ///   to fetch the whole object.
    ///
    /// Anything else is rejected and the current range is left unchanged.
    /// A successful call replaces any previous range.
    pub fn set_range(&mut self, start: i64, end: i64) -> Result<()> {
        let range = match (start, end) {
            (start, 0) if start > 0 => format!("bytes={}-", start),
            (start, end) if 0 <= start && start <= end => format!("bytes={}-{}", start, end),
            _ => {
                tracing::debug!(
                    target: TRACING_TARGET_RANGE,
                    start,
                    end,
                    "Rejected byte range"
                );
                return Err(to_invalid_argument(format!(
                    "Invalid Range : start={} end={}",
                    start, end
                )));
            }
        };

        tracing::trace!(target: TRACING_TARGET_RANGE, range = %range, "Byte range set");
        self.range = range;
        Ok(())
    }

    /// Consuming variant of [`set_range`](Self::set_range).
    pub fn with_range(mut self, start: i64, end: i64) -> Result<Self> {
        self.set_range(start, end)?;
        Ok(self)
    }

    /// Drops any requested range so the whole object is fetched.
    pub fn clear_range(&mut self) {
        self.range.clear();
    }

    /// Returns the range expression, or `None` when the whole object is wanted.
    pub fn range(&self) -> Option<&str> {
        if self.range.is_empty() {
            None
        } else {
            Some(&self.range)
        }
    }

    /// Returns the header the transport should send, if any.
    pub fn range_header(&self) -> Option<(&'static str, &str)> {
        self.range().map(|value| (RANGE_HEADER, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_of(start: i64, end: i64) -> Result<String> {
        let mut option = GetObjectOption::new();
        option.set_range(start, end)?;
        Ok(option.range().unwrap_or_default().to_owned())
    }

    #[test]
    fn open_ended_range() {
        assert_eq!(range_of(100, 0).unwrap(), "bytes=100-");
        assert_eq!(range_of(1, 0).unwrap(), "bytes=1-");
    }

    #[test]
    fn closed_range() {
        assert_eq!(range_of(0, 99).unwrap(), "bytes=0-99");
        assert_eq!(range_of(50, 50).unwrap(), "bytes=50-50");
        assert_eq!(range_of(i64::MAX, i64::MAX).unwrap(), format!("bytes={0}-{0}", i64::MAX));
    }

    #[test]
    fn zero_zero_is_first_byte() {
        assert_eq!(range_of(0, 0).unwrap(), "bytes=0-0");
    }

    #[test]
    fn rejects_negative_start() {
        let err = range_of(-1, 10).unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(err.message(), "Invalid Range : start=-1 end=10");
        assert!(range_of(-5, 0).is_err());
    }

    #[test]
    fn rejects_start_after_end() {
        let err = range_of(100, 50).unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(err.message().contains("start=100 end=50"));
        assert!(range_of(0, -1).is_err());
    }

    #[test]
    fn failure_leaves_previous_range() {
        let mut option = GetObjectOption::new();
        option.set_range(10, 20).unwrap();

        assert!(option.set_range(30, 5).is_err());
        assert_eq!(option.range(), Some("bytes=10-20"));
    }

    #[test]
    fn second_call_overwrites() {
        let mut option = GetObjectOption::new();
        option.set_range(0, 99).unwrap();
        option.set_range(200, 0).unwrap();

        assert_eq!(option.range(), Some("bytes=200-"));
    }

    #[test]
    fn header_only_when_set() {
        let mut option = GetObjectOption::new();
        assert_eq!(option.range_header(), None);

        option.set_range(5, 9).unwrap();
        assert_eq!(option.range_header(), Some(("Range", "bytes=5-9")));

        option.clear_range();
        assert_eq!(option.range_header(), None);
    }

    #[test]
    fn with_range_propagates_errors() {
        assert!(GetObjectOption::new().with_range(-1, 1).is_err());
        assert_eq!(
            GetObjectOption::new().with_range(7, 0).unwrap().range(),
            Some("bytes=7-")
        );
    }
}
