//! Transaction-shaping options.
//!
//! [`TxOption`] belongs to the signing and broadcast layer. Option records in
//! this crate never read its fields: they hold an `Arc<TxOption>` handle and
//! hand it over by reference through [`Transactional`]. A record without a
//! handle tells the signing layer to use its own defaults.

use std::sync::Arc;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::error::Error;
use crate::types::AccAddress;

/// How a signed transaction is submitted to the chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BroadcastMode {
    /// Wait for the CheckTx result.
    #[default]
    BroadcastModeSync,
    /// Return immediately after submission.
    BroadcastModeAsync,
    /// Wait for the transaction to be committed.
    BroadcastModeBlock,
}

/// A fee amount in a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Token denomination, e.g. `BNB`.
    pub denom: String,
    /// Amount in the smallest unit.
    pub amount: u128,
}

impl Coin {
    /// Creates a new coin.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Overrides for signing and broadcasting a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(
    name = "TxOptionBuilder",
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    derive(Debug),
    build_fn(error = "Error")
)]
pub struct TxOption {
    /// Broadcast mode; the signing layer picks one when unset.
    pub mode: Option<BroadcastMode>,
    /// Skip gas simulation before broadcasting.
    pub no_simulate: bool,
    /// Gas limit; zero lets simulation decide.
    pub gas_limit: u64,
    /// Explicit fee.
    pub fee_amount: Vec<Coin>,
    /// Account paying the fee when it differs from the signer.
    pub fee_payer: Option<AccAddress>,
    /// Account sequence override; zero means query the chain.
    pub nonce: u64,
    /// Free-form transaction memo.
    pub memo: String,
}

impl TxOption {
    /// Create a new builder.
    pub fn builder() -> TxOptionBuilder {
        TxOptionBuilder::default()
    }

    /// Wraps the option into a shareable handle.
    pub fn into_handle(self) -> Arc<TxOption> {
        Arc::new(self)
    }
}

/// Records that forward an optional [`TxOption`] to the signing layer.
pub trait Transactional {
    /// Returns the shared handle, if one was attached.
    fn tx_handle(&self) -> Option<&Arc<TxOption>>;

    /// Returns the transaction option by reference.
    ///
    /// `None` means the signing layer should apply its defaults.
    fn tx_opts(&self) -> Option<&TxOption> {
        self.tx_handle().map(Arc::as_ref)
    }
}

/// Implements [`Transactional`] and `with_tx_opts` for records whose
/// transaction handle lives in a `tx_opts` field.
macro_rules! impl_transactional {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::tx::Transactional for $ty {
                #[inline]
                fn tx_handle(&self) -> Option<&std::sync::Arc<$crate::tx::TxOption>> {
                    self.tx_opts.as_ref()
                }
            }

            impl $ty {
                /// Attaches a transaction option handle.
                #[must_use]
                pub fn with_tx_opts(
                    mut self,
                    tx_opts: impl Into<std::sync::Arc<$crate::tx::TxOption>>,
                ) -> Self {
                    self.tx_opts = Some(tx_opts.into());
                    self
                }
            }
        )+
    };
}

/// Declares option records whose only field is the transaction handle.
macro_rules! tx_only_option {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
            pub struct $name {
                /// Transaction overrides forwarded to the signing layer.
                #[serde(skip)]
                pub tx_opts: Option<std::sync::Arc<$crate::tx::TxOption>>,
            }

            impl $name {
                /// Creates an option that uses the default transaction behavior.
                pub fn new() -> Self {
                    Self::default()
                }
            }

            $crate::tx::impl_transactional!($name);
        )+
    };
}

pub(crate) use impl_transactional;
pub(crate) use tx_only_option;

#[cfg(test)]
mod tests {
    use super::*;

    tx_only_option! {
        /// Test-only record.
        DummyOption;
    }

    #[test]
    fn builder_sets_fields() {
        let tx = TxOption::builder()
            .with_mode(BroadcastMode::BroadcastModeAsync)
            .with_gas_limit(210_000u64)
            .with_memo("hello")
            .build()
            .expect("valid tx option");

        assert_eq!(tx.mode, Some(BroadcastMode::BroadcastModeAsync));
        assert_eq!(tx.gas_limit, 210_000);
        assert_eq!(tx.memo, "hello");
        assert!(!tx.no_simulate);
    }

    #[test]
    fn handle_is_forwarded_without_copy() {
        let handle = TxOption::builder()
            .with_nonce(7u64)
            .build()
            .unwrap()
            .into_handle();

        let option = DummyOption::new().with_tx_opts(Arc::clone(&handle));

        let forwarded = option.tx_handle().expect("handle attached");
        assert!(Arc::ptr_eq(forwarded, &handle));
        assert_eq!(option.tx_opts().map(|tx| tx.nonce), Some(7));
    }

    #[test]
    fn absent_handle_means_defaults() {
        assert!(DummyOption::new().tx_opts().is_none());
    }

    #[test]
    fn broadcast_mode_names() {
        assert_eq!(
            BroadcastMode::BroadcastModeSync.to_string(),
            "BROADCAST_MODE_SYNC"
        );
    }
}
