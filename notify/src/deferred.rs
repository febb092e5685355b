//! Notification sender that reads its credentials on first use.

use std::cell::OnceCell;
use std::path::PathBuf;

use tracing::debug;

use crate::{ApiCredentials, ApiGatewayClient, NotificationSender, NotifyError, StakeNotification};

/// An [`ApiGatewayClient`] built from a credentials file the first time a
/// stake is sent.
///
/// Cycles that deliver nothing (wallet down, counter unchanged, no new
/// stake) never open the file, so a missing or incomplete credentials file
/// only fails the cycles that actually have something to notify.
pub struct DeferredApiClient {
    env_file: PathBuf,
    client: OnceCell<ApiGatewayClient>,
}

impl DeferredApiClient {
    pub fn new(env_file: impl Into<PathBuf>) -> Self {
        Self {
            env_file: env_file.into(),
            client: OnceCell::new(),
        }
    }

    /// Whether the credentials have been read.
    pub fn is_loaded(&self) -> bool {
        self.client.get().is_some()
    }

    fn client(&self) -> Result<&ApiGatewayClient, NotifyError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let credentials = ApiCredentials::from_env_file(&self.env_file)?;
        debug!(file = %self.env_file.display(), "API credentials loaded");
        let client = ApiGatewayClient::new(credentials)?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl NotificationSender for DeferredApiClient {
    fn send(&self, notification: &StakeNotification) -> Result<(), NotifyError> {
        self.client()?.send(notification)
    }
}
