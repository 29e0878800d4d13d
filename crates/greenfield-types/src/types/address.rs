//! Account address type.
//!
//! Greenfield accounts are 20-byte addresses written as `0x`-prefixed hex,
//! the same encoding EVM chains use. Any option that carries an account
//! (payment address, storage provider, group member) stores an [`AccAddress`]
//! so malformed input is rejected while the option is being built.

use std::fmt;
use std::str::FromStr;

use derive_more::AsRef;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, to_invalid_argument};

/// Length of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// A validated 20-byte account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, AsRef)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccAddress([u8; ADDRESS_LENGTH]);

impl AccAddress {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parses a hex-encoded address, with or without the `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(to_invalid_argument(format!(
                "invalid account address '{}': expected {} hex digits, got {}",
                input,
                ADDRESS_LENGTH * 2,
                digits.len()
            )));
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| {
            to_invalid_argument(format!("invalid account address '{}': {}", input, e))
                .with_source(e)
        })?;

        Ok(Self(bytes))
    }

    /// Returns the raw address bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Returns whether every byte of the address is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Returns the lowercase `0x`-prefixed hex encoding.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccAddress({})", self)
    }
}

impl FromStr for AccAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for AccAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for AccAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<AccAddress> for String {
    fn from(address: AccAddress) -> Self {
        address.to_hex()
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

/// Parses a list of textual addresses, failing on the first malformed entry.
pub fn parse_addresses<I, S>(inputs: I) -> Result<Vec<AccAddress>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|s| AccAddress::from_hex(s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x6a8fE9C9C6A3C3a5b2B0F5A1Ba1E2A3c4D5e6F70";

    #[test]
    fn parses_prefixed_and_bare_hex() {
        let prefixed: AccAddress = ADDR.parse().expect("valid address");
        let bare = AccAddress::from_hex(&ADDR[2..]).expect("valid address");

        assert_eq!(prefixed, bare);
        assert_eq!(prefixed.to_string(), ADDR.to_lowercase());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = AccAddress::from_hex("0x1234").unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(err.message().contains("expected 40 hex digits"));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(AccAddress::from_hex(&format!(" {} ", ADDR)).is_err());
        assert!(AccAddress::from_hex(&format!("{}\n", ADDR)).is_err());
        assert!(format!("\t{}", &ADDR[2..]).parse::<AccAddress>().is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let input = format!("0x{}", "zz".repeat(ADDRESS_LENGTH));
        let err = AccAddress::from_hex(&input).unwrap_err();

        assert!(err.is_invalid_argument());
    }

    #[test]
    fn default_is_zero() {
        assert!(AccAddress::default().is_zero());
        assert!(!AccAddress::from_bytes([1; ADDRESS_LENGTH]).is_zero());
    }

    #[test]
    fn serde_uses_hex_string() {
        let address: AccAddress = ADDR.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();

        assert_eq!(json, format!("\"{}\"", ADDR.to_lowercase()));
        assert_eq!(serde_json::from_str::<AccAddress>(&json).unwrap(), address);
        assert!(serde_json::from_str::<AccAddress>("\"0xdead\"").is_err());
    }

    #[test]
    fn parse_addresses_stops_on_bad_entry() {
        let ok = parse_addresses([ADDR, ADDR]).unwrap();
        assert_eq!(ok.len(), 2);

        assert!(parse_addresses([ADDR, "nope"]).is_err());
    }
}
