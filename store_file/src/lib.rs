//! JSON file storage backend for the stakewatch checkpoint.
//!
//! The checkpoint lives in a single small JSON object with exactly two
//! string keys. The file is always rewritten wholesale.

pub mod checkpoint;
pub mod error;

pub use checkpoint::{FileCheckpointStore, DEFAULT_CHECKPOINT_FILE};
pub use error::FileStoreError;
