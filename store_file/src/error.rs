use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<FileStoreError> for stakewatch_store::StoreError {
    fn from(e: FileStoreError) -> Self {
        match e {
            FileStoreError::Serialization(msg) => stakewatch_store::StoreError::Serialization(msg),
            other => stakewatch_store::StoreError::Backend(other.to_string()),
        }
    }
}
