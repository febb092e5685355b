//! Notification sender for stakewatch.
//!
//! Delivers one stake event at a time to the notification API. The API sits
//! behind an OAuth2 client-credentials gate: an access token is fetched from
//! the token endpoint before each call and passed in the `Authorization`
//! header.

pub mod client;
pub mod credentials;
pub mod deferred;
pub mod error;
pub mod period;
pub mod sender;

pub use client::ApiGatewayClient;
pub use credentials::{ApiCredentials, DEFAULT_API_ENV_FILE};
pub use deferred::DeferredApiClient;
pub use error::NotifyError;
pub use period::StakePeriod;
pub use sender::{NotificationSender, StakeNotification};
