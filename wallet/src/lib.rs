//! Wallet query adapter for stakewatch.
//!
//! Talks to a locally running Verus wallet daemon through its command-line
//! client and turns the JSON it prints into the typed shapes from
//! `stakewatch-types`:
//! - [`ProcessLocator`] finds the daemon process and its working directory
//! - [`VerusCli`] runs `getwalletinfo` / `listtransactions` next to it
//! - [`WalletQuery`] is the seam the reconciliation engine depends on

pub mod cli;
pub mod error;
pub mod process;
pub mod query;

pub use cli::{VerusCli, DEFAULT_CLI_NAME, DEFAULT_PROCESS_NAME};
pub use error::WalletError;
pub use process::{ProcessLocator, RunningProcess};
pub use query::WalletQuery;
