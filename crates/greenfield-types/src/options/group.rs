//! Group lifecycle options.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, to_invalid_argument};
use crate::tx::{TxOption, impl_transactional, tx_only_option};
use crate::types::{AccAddress, parse_addresses};

/// Options used to construct a create-group message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateGroupOptions {
    /// Accounts added to the group on creation.
    pub init_group_member: Vec<AccAddress>,
    /// Free-form extra information, at most 512 characters.
    #[validate(length(max = 512))]
    pub extra: String,
    /// Transaction overrides forwarded to the signing layer.
    #[serde(skip)]
    pub tx_opts: Option<Arc<TxOption>>,
}

impl CreateGroupOptions {
    /// Longest accepted `extra` value.
    pub const MAX_EXTRA_LEN: usize = 512;

    /// Creates options for an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial members from their hex addresses.
    pub fn with_members<I, S>(mut self, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.init_group_member = parse_addresses(members)?;
        Ok(self)
    }

    /// Sets the extra information, rejecting values that are too long.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Result<Self> {
        self.extra = extra.into();
        self.validate()?;
        Ok(self)
    }

    /// Checks the length of `extra`.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|errors| {
            to_invalid_argument(format!(
                "group extra must be at most {} characters",
                Self::MAX_EXTRA_LEN
            ))
            .with_source(errors)
        })
    }
}

impl_transactional!(CreateGroupOptions);

tx_only_option! {
    /// Options for adding or removing group members.
    UpdateGroupMemberOption;
    /// Options for leaving a group.
    LeaveGroupOption;
    /// Options for deleting a group.
    DeleteGroupOption;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::Transactional;

    #[test]
    fn create_group_with_members() {
        let options = CreateGroupOptions::new()
            .with_members(["0x0000000000000000000000000000000000000001"])
            .unwrap()
            .with_extra("team photos")
            .unwrap();

        assert_eq!(options.init_group_member.len(), 1);
        assert_eq!(options.extra, "team photos");
        assert!(options.tx_opts().is_none());
    }

    #[test]
    fn rejects_long_extra() {
        let err = CreateGroupOptions::new()
            .with_extra("x".repeat(513))
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(CreateGroupOptions::new().with_extra("x".repeat(512)).is_ok());
    }

    #[test]
    fn rejects_bad_member() {
        assert!(CreateGroupOptions::new().with_members(["alice"]).is_err());
    }

    #[test]
    fn tx_only_group_records() {
        let option = LeaveGroupOption::new().with_tx_opts(TxOption::default());

        assert!(option.tx_opts().is_some());
        assert!(UpdateGroupMemberOption::new().tx_opts().is_none());
        assert!(DeleteGroupOption::new().tx_opts().is_none());
    }
}
