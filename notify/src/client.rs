//! Blocking HTTP client for the notification API.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{ApiCredentials, NotificationSender, NotifyError, StakeNotification, StakePeriod};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Response bodies longer than this are shortened in error messages.
const MAX_BODY_IN_ERROR: usize = 90;

/// Token endpoint response (only the field we use).
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the notification API.
///
/// Every call first exchanges the client credentials for a fresh access
/// token; tokens are not cached between calls.
pub struct ApiGatewayClient {
    http: reqwest::blocking::Client,
    credentials: ApiCredentials,
}

impl ApiGatewayClient {
    pub fn new(credentials: ApiCredentials) -> Result<Self, NotifyError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http, credentials })
    }

    /// Fetch an access token with the OAuth2 client-credentials grant.
    pub fn access_token(&self) -> Result<String, NotifyError> {
        let response = self
            .http
            .post(&self.credentials.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.credentials.scopes.as_str()),
            ])
            .send()
            .map_err(transport_error)?;

        let token: TokenResponse = parse_json(response)?;
        debug!("access token acquired");
        Ok(token.access_token)
    }

    /// `POST` one stake to the API and return its JSON reply.
    pub fn post_stake(
        &self,
        notification: &StakeNotification,
    ) -> Result<serde_json::Value, NotifyError> {
        let token = self.access_token()?;
        let response = self
            .http
            .post(&self.credentials.api_url)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(notification)
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }

    /// `GET` the stake totals for `period`.
    pub fn get_stakes(&self, period: &StakePeriod) -> Result<serde_json::Value, NotifyError> {
        let token = self.access_token()?;
        let response = self
            .http
            .get(&self.credentials.api_url)
            .header(reqwest::header::AUTHORIZATION, token)
            .query(&period.query())
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }
}

impl NotificationSender for ApiGatewayClient {
    fn send(&self, notification: &StakeNotification) -> Result<(), NotifyError> {
        self.post_stake(notification)?;
        info!(
            txid = %notification.txid,
            time = notification.time.as_secs(),
            amount = %notification.amount,
            "stake notification delivered"
        );
        Ok(())
    }
}

fn transport_error(e: reqwest::Error) -> NotifyError {
    if e.is_timeout() {
        NotifyError::Transport(format!("request timed out: {e}"))
    } else if e.is_connect() {
        NotifyError::Transport(format!("connection failed: {e}"))
    } else {
        NotifyError::Transport(e.to_string())
    }
}

/// Anything but `200 OK` is an error; the body is shortened for the message.
fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T, NotifyError> {
    let status = response.status();
    let body = response.text().map_err(transport_error)?;
    if status != reqwest::StatusCode::OK {
        return Err(NotifyError::Status {
            status: status.as_u16(),
            body: shorten(&body),
        });
    }
    serde_json::from_str(&body).map_err(|e| NotifyError::InvalidResponse(e.to_string()))
}

fn shorten(body: &str) -> String {
    if body.chars().count() > MAX_BODY_IN_ERROR {
        let head: String = body.chars().take(MAX_BODY_IN_ERROR - 3).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
