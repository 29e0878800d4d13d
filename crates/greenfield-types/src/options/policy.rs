//! Permission policy options.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, to_invalid_argument};
use crate::tx::{TxOption, impl_transactional, tx_only_option};

/// Options for attaching a policy to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutPolicyOption {
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    pub tx_opts: Option<Arc<TxOption>>,
    /// When the policy stops applying. `None` means it never expires.
    pub policy_expire_time: Option<Timestamp>,
}

impl PutPolicyOption {
    /// Creates options for a policy that never expires.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy expiry time.
    #[must_use]
    pub fn with_expire_time(mut self, expire_time: Timestamp) -> Self {
        self.policy_expire_time = Some(expire_time);
        self
    }
}

/// Options for building a single policy statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewStatementOptions {
    /// When the statement stops applying. `None` means it never expires.
    pub statement_expire_time: Option<Timestamp>,
    /// Object size limit in bytes. `None` leaves the size unrestricted,
    /// `Some(0)` is an explicit zero limit.
    pub limit_size: Option<u64>,
}

impl NewStatementOptions {
    /// Creates options for an unrestricted statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the statement expiry time.
    #[must_use]
    pub fn with_expire_time(mut self, expire_time: Timestamp) -> Self {
        self.statement_expire_time = Some(expire_time);
        self
    }

    /// Sets the object size limit.
    #[must_use]
    pub fn with_limit_size(mut self, limit_size: u64) -> Self {
        self.limit_size = Some(limit_size);
        self
    }

    /// Checks that the expiry, if any, is still in the future at `now`.
    pub fn validate_at(&self, now: Timestamp) -> Result<()> {
        match self.statement_expire_time {
            Some(expire_time) if expire_time <= now => Err(to_invalid_argument(format!(
                "statement expire time {} is not after {}",
                expire_time, now
            ))),
            _ => Ok(()),
        }
    }
}

impl_transactional!(PutPolicyOption);

tx_only_option! {
    /// Options for removing a policy.
    DeletePolicyOption;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::Transactional;

    #[test]
    fn put_policy_defaults_to_no_expiry() {
        let options = PutPolicyOption::new();

        assert!(options.policy_expire_time.is_none());
        assert!(options.tx_opts().is_none());
    }

    #[test]
    fn put_policy_expiry_serializes() {
        let expire: Timestamp = "2030-01-01T00:00:00Z".parse().unwrap();
        let options = PutPolicyOption::new().with_expire_time(expire);

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["policy_expire_time"], "2030-01-01T00:00:00Z");
    }

    #[test]
    fn statement_limit_size_is_tri_state() {
        assert_eq!(NewStatementOptions::new().limit_size, None);
        assert_eq!(NewStatementOptions::new().with_limit_size(0).limit_size, Some(0));
    }

    #[test]
    fn statement_expiry_must_be_in_future() {
        let now: Timestamp = "2025-06-01T00:00:00Z".parse().unwrap();
        let past: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
        let future: Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();

        assert!(NewStatementOptions::new().validate_at(now).is_ok());
        assert!(NewStatementOptions::new().with_expire_time(future).validate_at(now).is_ok());

        let err = NewStatementOptions::new()
            .with_expire_time(past)
            .validate_at(now)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn delete_policy_forwards_tx() {
        let option = DeletePolicyOption::new().with_tx_opts(TxOption::default());
        assert!(option.tx_opts().is_some());
    }
}
