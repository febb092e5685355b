//! Fundamental types for stakewatch.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! transaction ids, amounts, timestamps, the stake transaction record and the typed
//! shapes of the wallet's JSON responses.

pub mod amount;
pub mod error;
pub mod stake;
pub mod time;
pub mod txid;
pub mod wallet;

pub use amount::Amount;
pub use error::TypesError;
pub use stake::StakeTransaction;
pub use time::Timestamp;
pub use txid::TxId;
pub use wallet::{WalletSummary, WalletTransaction, STAKE_CATEGORY};
