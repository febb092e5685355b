//! Stake reconciliation for stakewatch.
//!
//! One polling cycle reads the wallet summary, compares the transaction
//! counter with the persisted checkpoint and, when it moved, diffs the
//! recent stake transactions against the last acknowledged one:
//!
//! ```text
//!   summary ──► counter unchanged? ──yes──► NoChange
//!                    │ no
//!                    ▼
//!   listing ──► StakeTransactions ──► new_since(anchor) ──► notify each (oldest first)
//!                                                               │ all delivered
//!                                                               ▼
//!                                                        save checkpoint
//! ```
//!
//! The checkpoint is committed only after every new stake was delivered, so a
//! failed delivery is retried by the next cycle.

pub mod checker;
pub mod collection;
pub mod config;
pub mod error;

pub use checker::{CycleOutcome, StakeChecker, DEFAULT_WINDOW};
pub use collection::StakeTransactions;
pub use config::CheckerConfig;
pub use error::ReconcileError;
