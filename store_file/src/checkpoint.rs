//! File-backed implementation of [`CheckpointStore`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use stakewatch_store::{Checkpoint, CheckpointStore, StoreError};
use stakewatch_types::TxId;

use crate::FileStoreError;

/// File name used when no explicit checkpoint path is configured.
pub const DEFAULT_CHECKPOINT_FILE: &str = "tx_history.json";

/// On-disk layout. Any other key set fails to decode and is treated as absent.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CheckpointFile {
    txid_stake_previous: String,
    txcount_previous: String,
}

impl From<CheckpointFile> for Checkpoint {
    fn from(file: CheckpointFile) -> Self {
        Checkpoint::new(file.txcount_previous, TxId::new(file.txid_stake_previous))
    }
}

impl From<&Checkpoint> for CheckpointFile {
    fn from(cp: &Checkpoint) -> Self {
        Self {
            txid_stake_previous: cp.last_stake_id.to_string(),
            txcount_previous: cp.last_transaction_count.clone(),
        }
    }
}

/// Checkpoint stored as a single JSON object in a file.
///
/// No locking is done: one writer at a time is assumed.
#[derive(Clone, Debug)]
pub struct FileCheckpointStore {
    path: PathBuf,
}

impl FileCheckpointStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> FileStoreError {
        FileStoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Write the whole document to a sibling temp file, then rename it over
    /// the target so readers never observe a half-written checkpoint.
    fn write(&self, checkpoint: &Checkpoint) -> Result<(), FileStoreError> {
        let json = serde_json::to_string(&CheckpointFile::from(checkpoint))
            .map_err(|e| FileStoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

impl CheckpointStore for FileCheckpointStore {
    fn load(&self) -> Result<Checkpoint, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<CheckpointFile>(&bytes) {
                Ok(file) => {
                    let checkpoint = Checkpoint::from(file);
                    debug!(
                        path = %self.path.display(),
                        txcount = %checkpoint.last_transaction_count,
                        last_stake = %checkpoint.last_stake_id,
                        "checkpoint loaded"
                    );
                    return Ok(checkpoint);
                }
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "checkpoint file is invalid, resetting to defaults"
                    );
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no checkpoint file, creating one with defaults");
            }
            Err(e) => return Err(self.io_err(e).into()),
        }

        let checkpoint = Checkpoint::default();
        self.write(&checkpoint)?;
        Ok(checkpoint)
    }

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), StoreError> {
        self.write(checkpoint)?;
        debug!(
            path = %self.path.display(),
            txcount = %checkpoint.last_transaction_count,
            last_stake = %checkpoint.last_stake_id,
            "checkpoint saved"
        );
        Ok(())
    }
}
