use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("API configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API response: {status} {body}")]
    Status { status: u16, body: String },

    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    #[error("invalid period {0:?}: expected YYYY or YYYY-MM")]
    InvalidPeriod(String),
}
