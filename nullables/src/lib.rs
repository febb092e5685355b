//! In-memory stand-ins for the checker's collaborators.
//!
//! [`NullWallet`] answers `getwalletinfo` / `listtransactions` from a
//! scripted history, [`NullNotifier`] records deliveries and can be told to
//! reject specific stakes, and [`NullCheckpointStore`] keeps the checkpoint
//! in memory. None of them spawn processes, open sockets or write files, so
//! whole polling cycles run deterministically inside a unit test.

pub mod notifier;
pub mod store;
pub mod wallet;

pub use notifier::NullNotifier;
pub use store::NullCheckpointStore;
pub use wallet::{mint, non_stake, NullWallet};
