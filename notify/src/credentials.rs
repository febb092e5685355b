//! API credentials stored in a dotenv-format file.

use std::collections::HashMap;
use std::path::Path;

use crate::NotifyError;

/// File the credentials are read from when no other path is configured.
pub const DEFAULT_API_ENV_FILE: &str = ".env-api";

const NOTIFICATION_API_URL: &str = "NOTIFICATION_API_URL";
const COGNITO_CLIENT_ID: &str = "COGNITO_CLIENT_ID";
const COGNITO_CLIENT_SECRET: &str = "COGNITO_CLIENT_SECRET";
const COGNITO_OAUTH_LIST_OF_SCOPES: &str = "COGNITO_OAUTH_LIST_OF_SCOPES";
const COGNITO_TOKEN_URL: &str = "COGNITO_TOKEN_URL";

/// Everything needed to reach the notification API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Space-separated OAuth scopes requested for the access token.
    pub scopes: String,
    pub token_url: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scopes", &self.scopes)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl ApiCredentials {
    /// Read credentials from a dotenv file without touching the process environment.
    ///
    /// Every key must be present; values may not be empty.
    pub fn from_env_file(path: &Path) -> Result<Self, NotifyError> {
        if !path.is_file() {
            return Err(NotifyError::Config(format!(
                "file {} does not exist",
                path.display()
            )));
        }
        let iter = dotenv::from_path_iter(path)
            .map_err(|e| NotifyError::Config(format!("cannot read {}: {e}", path.display())))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| {
                NotifyError::Config(format!("cannot parse {}: {e}", path.display()))
            })?;
            vars.insert(key, value);
        }
        Self::from_map(&vars, path)
    }

    fn from_map(vars: &HashMap<String, String>, path: &Path) -> Result<Self, NotifyError> {
        let get = |key: &str| -> Result<String, NotifyError> {
            match vars.get(key) {
                Some(v) if !v.is_empty() => Ok(v.clone()),
                _ => Err(NotifyError::Config(format!(
                    "the {key} in {} is missing",
                    path.display()
                ))),
            }
        };
        Ok(Self {
            api_url: get(NOTIFICATION_API_URL)?,
            client_id: get(COGNITO_CLIENT_ID)?,
            client_secret: get(COGNITO_CLIENT_SECRET)?,
            scopes: get(COGNITO_OAUTH_LIST_OF_SCOPES)?,
            token_url: get(COGNITO_TOKEN_URL)?,
        })
    }
}
