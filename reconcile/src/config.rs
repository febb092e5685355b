//! Checker configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stakewatch_utils::LogFormat;
use stakewatch_wallet::{VerusCli, DEFAULT_CLI_NAME, DEFAULT_PROCESS_NAME};

use crate::{ReconcileError, DEFAULT_WINDOW};

/// Configuration for one checker invocation.
///
/// Can be loaded from a TOML file via [`CheckerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Executable name of the wallet daemon.
    #[serde(default = "default_process_name")]
    pub process_name: String,

    /// Name of the command-line client in the daemon's working directory.
    #[serde(default = "default_cli_name")]
    pub cli_name: String,

    /// Explicit client path; overrides the daemon-directory lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli_path: Option<PathBuf>,

    /// Checkpoint file.
    #[serde(default = "default_checkpoint_file")]
    pub checkpoint_file: PathBuf,

    /// Number of recent wallet transactions inspected per cycle.
    #[serde(default = "default_window")]
    pub window: usize,

    /// Dotenv file holding the notification API credentials.
    #[serde(default = "default_api_env_file")]
    pub api_env_file: PathBuf,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Append logs to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_process_name() -> String {
    DEFAULT_PROCESS_NAME.to_string()
}

fn default_cli_name() -> String {
    DEFAULT_CLI_NAME.to_string()
}

fn default_checkpoint_file() -> PathBuf {
    PathBuf::from("tx_history.json")
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_api_env_file() -> PathBuf {
    PathBuf::from(stakewatch_notify::DEFAULT_API_ENV_FILE)
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CheckerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ReconcileError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReconcileError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ReconcileError> {
        let config: Self = toml::from_str(s).map_err(|e| ReconcileError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ReconcileError> {
        toml::to_string_pretty(self).map_err(|e| ReconcileError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ReconcileError> {
        if self.window == 0 {
            return Err(ReconcileError::Config(
                "window must be at least 1".to_string(),
            ));
        }
        if self.process_name.is_empty() {
            return Err(ReconcileError::Config(
                "process_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The wallet client described by this configuration.
    pub fn wallet_client(&self) -> VerusCli {
        let cli = VerusCli::new(&self.process_name, &self.cli_name);
        match &self.cli_path {
            Some(path) => cli.with_cli_path(path),
            None => cli,
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            process_name: default_process_name(),
            cli_name: default_cli_name(),
            cli_path: None,
            checkpoint_file: default_checkpoint_file(),
            window: default_window(),
            api_env_file: default_api_env_file(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = CheckerConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = CheckerConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.window, config.window);
        assert_eq!(parsed.checkpoint_file, config.checkpoint_file);
        assert_eq!(parsed.cli_path, None);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = CheckerConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.process_name, "verusd");
        assert_eq!(config.cli_name, "verus");
        assert_eq!(config.window, 50);
        assert_eq!(config.checkpoint_file, PathBuf::from("tx_history.json"));
        assert_eq!(config.api_env_file, PathBuf::from(".env-api"));
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            window = 200
            log_format = "json"
            log_file = "/var/log/stake.log"
            cli_path = "/opt/verus/verus"
        "#;
        let config = CheckerConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.window, 200);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/stake.log")));
        assert_eq!(config.log_level, "info"); // default
        assert_eq!(
            config.wallet_client().process_name(),
            DEFAULT_PROCESS_NAME
        );
    }

    #[test]
    fn zero_window_is_rejected() {
        let err = CheckerConfig::from_toml_str("window = 0").unwrap_err();
        assert!(matches!(err, ReconcileError::Config(_)));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = CheckerConfig::from_toml_file(Path::new("/nonexistent/stakewatch.toml"));
        assert!(matches!(result, Err(ReconcileError::Config(_))));
    }
}
