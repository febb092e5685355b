//! Nullable notifier — record notifications without sending them.

use stakewatch_notify::{NotificationSender, NotifyError, StakeNotification};
use stakewatch_types::TxId;
use std::cell::RefCell;
use std::collections::HashSet;

/// A notifier that records every delivered notification.
///
/// Individual transaction ids can be marked as failing; a failing delivery
/// is not recorded.
pub struct NullNotifier {
    sent: RefCell<Vec<StakeNotification>>,
    failing: RefCell<HashSet<TxId>>,
    attempts: RefCell<Vec<TxId>>,
}

impl NullNotifier {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            failing: RefCell::new(HashSet::new()),
            attempts: RefCell::new(Vec::new()),
        }
    }

    /// Reject deliveries of `txid` until [`NullNotifier::recover`] is called.
    pub fn fail_on(&self, txid: &str) {
        self.failing.borrow_mut().insert(TxId::from(txid));
    }

    /// Accept every delivery again.
    pub fn recover(&self) {
        self.failing.borrow_mut().clear();
    }

    /// All successfully delivered notifications, in order.
    pub fn sent(&self) -> Vec<StakeNotification> {
        self.sent.borrow().clone()
    }

    /// Ids of successfully delivered notifications, in order.
    pub fn sent_ids(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|n| n.txid.to_string()).collect()
    }

    /// Ids of every delivery attempt, including failed ones.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().iter().map(|id| id.to_string()).collect()
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSender for NullNotifier {
    fn send(&self, notification: &StakeNotification) -> Result<(), NotifyError> {
        self.attempts.borrow_mut().push(notification.txid.clone());
        if self.failing.borrow().contains(&notification.txid) {
            return Err(NotifyError::Status {
                status: 503,
                body: "null notifier: delivery disabled".to_string(),
            });
        }
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}
