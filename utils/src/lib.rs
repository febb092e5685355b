//! Shared utilities for stakewatch.

pub mod logging;

pub use logging::{build_dispatch, LogFormat, LogTarget, LoggingError};
