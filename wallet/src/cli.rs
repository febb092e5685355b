//! Verus command-line client adapter.

use std::path::PathBuf;
use std::process::Command;

use serde::de::DeserializeOwned;
use tracing::debug;

use stakewatch_types::{WalletSummary, WalletTransaction};

use crate::{ProcessLocator, WalletError, WalletQuery};

/// Executable name of the wallet daemon.
pub const DEFAULT_PROCESS_NAME: &str = "verusd";

/// Name of the command-line client shipped next to the daemon.
pub const DEFAULT_CLI_NAME: &str = "verus";

/// Queries the wallet by running its command-line client.
///
/// The client is looked up in the daemon's working directory unless an
/// explicit path is configured. Each query first checks the daemon is alive.
#[derive(Clone, Debug)]
pub struct VerusCli {
    process_name: String,
    cli_name: String,
    cli_path: Option<PathBuf>,
    locator: ProcessLocator,
}

impl VerusCli {
    pub fn new(process_name: impl Into<String>, cli_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            cli_name: cli_name.into(),
            cli_path: None,
            locator: ProcessLocator::new(),
        }
    }

    /// Use a fixed client path instead of `<daemon cwd>/<cli_name>`.
    pub fn with_cli_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cli_path = Some(path.into());
        self
    }

    pub fn with_locator(mut self, locator: ProcessLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Path of the client to execute, or `Unavailable` if the daemon is down.
    pub fn resolve_cli(&self) -> Result<PathBuf, WalletError> {
        let process = self
            .locator
            .find(&self.process_name)
            .ok_or_else(|| WalletError::Unavailable(self.process_name.clone()))?;

        if let Some(path) = &self.cli_path {
            return Ok(path.clone());
        }
        let cwd = process
            .cwd
            .ok_or_else(|| WalletError::UnknownDirectory(self.process_name.clone()))?;
        Ok(cwd.join(&self.cli_name))
    }

    fn run<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T, WalletError> {
        let cli = self.resolve_cli()?;
        let command = format!("{} {}", cli.display(), args.join(" "));
        debug!(%command, "querying wallet");

        let output = Command::new(&cli)
            .args(args)
            .output()
            .map_err(|source| WalletError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(WalletError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| WalletError::InvalidResponse {
            command: args.first().copied().unwrap_or_default().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for VerusCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESS_NAME, DEFAULT_CLI_NAME)
    }
}

impl WalletQuery for VerusCli {
    fn summary(&self) -> Result<WalletSummary, WalletError> {
        self.run(&["getwalletinfo"])
    }

    fn transactions(&self, count: usize) -> Result<Vec<WalletTransaction>, WalletError> {
        let count = count.to_string();
        self.run(&["listtransactions", "*", &count])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_when_daemon_missing() {
        let root = tempfile::tempdir().unwrap();
        let cli = VerusCli::default().with_locator(ProcessLocator::with_root(root.path()));
        let err = cli.summary().unwrap_err();
        assert!(err.is_unavailable());
        assert!(cli.transactions(50).unwrap_err().is_unavailable());
    }

    #[test]
    fn unknown_directory_without_explicit_path() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("31");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("comm"), "verusd\n").unwrap();

        let cli = VerusCli::default().with_locator(ProcessLocator::with_root(root.path()));
        assert!(matches!(
            cli.resolve_cli().unwrap_err(),
            WalletError::UnknownDirectory(_)
        ));

        let cli = cli.with_cli_path("/opt/verus/verus");
        assert_eq!(cli.resolve_cli().unwrap(), PathBuf::from("/opt/verus/verus"));
    }
}
