use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet process {0} is not running")]
    Unavailable(String),

    #[error("working directory of wallet process {0} is not readable")]
    UnknownDirectory(String),

    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("invalid {command} response: {reason}")]
    InvalidResponse { command: String, reason: String },
}

impl WalletError {
    /// Whether the failure only means the wallet is not up right now.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, WalletError::Unavailable(_))
    }
}
