#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for byte-range handling.
///
/// Use this target for logging range construction and rejected bounds.
pub const TRACING_TARGET_RANGE: &str = "greenfield_types::range";

/// Tracing target for listing and pagination options.
///
/// Use this target for logging page size resolution and query encoding.
pub const TRACING_TARGET_LISTING: &str = "greenfield_types::listing";

/// Tracing target for the remaining option records.
///
/// Use this target for logging address, hash, endpoint and price validation.
pub const TRACING_TARGET_OPTIONS: &str = "greenfield_types::options";

mod config;
mod error;
pub mod options;
#[doc(hidden)]
pub mod prelude;
pub mod tx;
pub mod types;

pub use config::OptionsConfig;
pub use error::{BoxedError, Error, ErrorKind, Result, to_invalid_argument};
