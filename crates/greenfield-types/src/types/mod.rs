//! Value types shared across option records.

mod address;
mod redundancy;
mod source_type;
mod visibility;

pub use address::{ADDRESS_LENGTH, AccAddress, parse_addresses};
pub use redundancy::RedundancyType;
pub use source_type::SourceType;
pub use visibility::Visibility;
