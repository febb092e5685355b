//! Nullable checkpoint store — in-memory checkpoint for testing.

use stakewatch_store::{Checkpoint, CheckpointStore, StoreError};
use std::cell::{Cell, RefCell};

/// An in-memory checkpoint store.
///
/// Like the file store, loading an empty store materialises the default
/// checkpoint.
pub struct NullCheckpointStore {
    checkpoint: RefCell<Option<Checkpoint>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl NullCheckpointStore {
    pub fn new() -> Self {
        Self {
            checkpoint: RefCell::new(None),
            saves: Cell::new(0),
            fail_saves: Cell::new(false),
        }
    }

    /// Start from an existing checkpoint.
    pub fn with(checkpoint: Checkpoint) -> Self {
        let store = Self::new();
        *store.checkpoint.borrow_mut() = Some(checkpoint);
        store
    }

    /// The stored checkpoint, if any.
    pub fn current(&self) -> Option<Checkpoint> {
        self.checkpoint.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    /// Make every following `save` fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Forget the stored checkpoint (simulates a lost file).
    pub fn wipe(&self) {
        *self.checkpoint.borrow_mut() = None;
    }
}

impl Default for NullCheckpointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckpointStore for NullCheckpointStore {
    fn load(&self) -> Result<Checkpoint, StoreError> {
        let mut slot = self.checkpoint.borrow_mut();
        Ok(slot.get_or_insert_with(Checkpoint::default).clone())
    }

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Backend("null store: save disabled".to_string()));
        }
        *self.checkpoint.borrow_mut() = Some(checkpoint.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
