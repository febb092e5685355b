//! The notification seam.

use serde::Serialize;
use stakewatch_types::{Amount, StakeTransaction, Timestamp, TxId};

use crate::NotifyError;

/// Body of one stake notification: `{"txid": .., "time": .., "amount": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StakeNotification {
    pub txid: TxId,
    pub time: Timestamp,
    pub amount: Amount,
}

impl From<&StakeTransaction> for StakeNotification {
    fn from(stake: &StakeTransaction) -> Self {
        Self {
            txid: stake.id().clone(),
            time: stake.timestamp(),
            amount: stake.amount(),
        }
    }
}

/// Delivers stake events to a remote endpoint.
///
/// Only success or failure matters to the caller; response payloads are ignored.
pub trait NotificationSender {
    fn send(&self, notification: &StakeNotification) -> Result<(), NotifyError>;
}

impl<T: NotificationSender + ?Sized> NotificationSender for &T {
    fn send(&self, notification: &StakeNotification) -> Result<(), NotifyError> {
        (**self).send(notification)
    }
}
