//! Prelude module for greenfield-types.
//!
//! Re-exports the option records and supporting types so a single `use`
//! statement covers most call sites.
//!
//! # Example
//!
//! ```rust
//! use greenfield_types::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let mut option = GetObjectOption::new();
//! option.set_range(0, 1023)?;
//! assert_eq!(option.range(), Some("bytes=0-1023"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub use crate::config::OptionsConfig;
pub use crate::error::{Error, ErrorKind, Result, to_invalid_argument};
pub use crate::options::*;
pub use crate::tx::{BroadcastMode, Coin, Transactional, TxOption, TxOptionBuilder};
pub use crate::types::{AccAddress, RedundancyType, SourceType, Visibility};
