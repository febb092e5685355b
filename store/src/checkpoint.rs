//! The persistent checkpoint: what has already been processed.

use serde::{Deserialize, Serialize};
use stakewatch_types::TxId;

use crate::StoreError;

/// Counter value recorded before any cycle has completed.
pub const INITIAL_TRANSACTION_COUNT: &str = "0";

/// Last observed wallet state, committed at the end of a cycle that saw a change.
///
/// Always read and written as a whole; there are no partial-field updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Wallet-wide transaction counter seen by the last committed cycle.
    pub last_transaction_count: String,
    /// Most recent stake transaction acknowledged, empty if none yet.
    pub last_stake_id: TxId,
}

impl Checkpoint {
    pub fn new(last_transaction_count: impl Into<String>, last_stake_id: TxId) -> Self {
        Self {
            last_transaction_count: last_transaction_count.into(),
            last_stake_id,
        }
    }

    /// Whether the wallet counter differs from the recorded one.
    pub fn counter_changed(&self, txcount: u64) -> bool {
        self.last_transaction_count != txcount.to_string()
    }
}

impl Default for Checkpoint {
    fn default() -> Self {
        Self {
            last_transaction_count: INITIAL_TRANSACTION_COUNT.to_string(),
            last_stake_id: TxId::empty(),
        }
    }
}

/// Trait for durable checkpoint storage.
///
/// `load` never fails on missing or malformed content: such content is
/// replaced by [`Checkpoint::default`]. Only genuine I/O failures surface.
pub trait CheckpointStore {
    /// Read the checkpoint, resetting it to defaults when absent or invalid.
    fn load(&self) -> Result<Checkpoint, StoreError>;

    /// Overwrite the stored checkpoint with `checkpoint`.
    fn save(&self, checkpoint: &Checkpoint) -> Result<(), StoreError>;
}

impl<T: CheckpointStore + ?Sized> CheckpointStore for &T {
    fn load(&self) -> Result<Checkpoint, StoreError> {
        (**self).load()
    }

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), StoreError> {
        (**self).save(checkpoint)
    }
}
