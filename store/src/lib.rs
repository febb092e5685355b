//! Abstract checkpoint storage for stakewatch.
//!
//! Every backend (JSON file, in-memory for testing) implements
//! [`CheckpointStore`]. The reconciliation engine depends only on the trait.

pub mod checkpoint;
pub mod error;

pub use checkpoint::{Checkpoint, CheckpointStore, INITIAL_TRANSACTION_COUNT};
pub use error::StoreError;
