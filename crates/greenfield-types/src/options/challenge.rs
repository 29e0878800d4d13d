//! Challenge lookup options.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::TRACING_TARGET_OPTIONS;
use crate::error::{Result, to_invalid_argument};
use crate::types::AccAddress;

/// Which storage provider a challenge query is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeTarget<'a> {
    /// Query the provider at this endpoint directly.
    Endpoint(&'a Url),
    /// Resolve the provider's endpoint from its operator address.
    Address(&'a AccAddress),
}

/// Options for fetching challenge information from a storage provider.
///
/// Either the endpoint or the provider address must be given. When both are
/// set the endpoint is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChallengeInfoOptions {
    /// Endpoint of the storage provider.
    pub endpoint: Option<Url>,
    /// Operator address of the storage provider to challenge.
    pub sp_address: Option<AccAddress>,
}

impl GetChallengeInfoOptions {
    /// Creates options with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider endpoint. Only `http` and `https` are accepted.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| {
            tracing::debug!(
                target: TRACING_TARGET_OPTIONS,
                endpoint,
                error = %e,
                "Rejected provider endpoint"
            );
            to_invalid_argument(format!("invalid endpoint '{}': {}", endpoint, e)).with_source(e)
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(to_invalid_argument(format!(
                "endpoint '{}' must use http or https",
                endpoint
            )));
        }

        self.endpoint = Some(url);
        Ok(self)
    }

    /// Sets the provider address from its hex encoding.
    pub fn with_sp_address(mut self, address: &str) -> Result<Self> {
        self.sp_address = Some(address.parse()?);
        Ok(self)
    }

    /// Returns where the query should go.
    pub fn target(&self) -> Result<ChallengeTarget<'_>> {
        match (&self.endpoint, &self.sp_address) {
            (Some(endpoint), _) => Ok(ChallengeTarget::Endpoint(endpoint)),
            (None, Some(address)) => Ok(ChallengeTarget::Address(address)),
            (None, None) => Err(to_invalid_argument(
                "either endpoint or sp_address must be set",
            )),
        }
    }

    /// Checks that a target is set.
    pub fn validate(&self) -> Result<()> {
        self.target().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[test]
    fn endpoint_takes_precedence() {
        let options = GetChallengeInfoOptions::new()
            .with_sp_address(SP)
            .unwrap()
            .with_endpoint("https://sp0.greenfield.io")
            .unwrap();

        match options.target().unwrap() {
            ChallengeTarget::Endpoint(url) => assert_eq!(url.host_str(), Some("sp0.greenfield.io")),
            other => panic!("unexpected target: {:?}", other),
        }
    }

    #[test]
    fn falls_back_to_address() {
        let options = GetChallengeInfoOptions::new().with_sp_address(SP).unwrap();

        match options.target().unwrap() {
            ChallengeTarget::Address(address) => assert_eq!(address.to_string(), SP),
            other => panic!("unexpected target: {:?}", other),
        }
    }

    #[test]
    fn requires_a_target() {
        let err = GetChallengeInfoOptions::new().validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn rejects_bad_endpoint() {
        assert!(GetChallengeInfoOptions::new().with_endpoint("not a url").is_err());
        assert!(
            GetChallengeInfoOptions::new()
                .with_endpoint("ftp://sp0.greenfield.io")
                .is_err()
        );
        assert!(GetChallengeInfoOptions::new().with_sp_address("0x12").is_err());
    }
}
