//! The wallet query seam.

use stakewatch_types::{WalletSummary, WalletTransaction};

use crate::WalletError;

/// Read-only view of the wallet needed by one polling cycle.
pub trait WalletQuery {
    /// Wallet-wide summary (`getwalletinfo`).
    ///
    /// Returns [`WalletError::Unavailable`] when the wallet process is not running.
    fn summary(&self) -> Result<WalletSummary, WalletError>;

    /// The most recent `count` wallet transactions, oldest first.
    fn transactions(&self, count: usize) -> Result<Vec<WalletTransaction>, WalletError>;
}

impl<T: WalletQuery + ?Sized> WalletQuery for &T {
    fn summary(&self) -> Result<WalletSummary, WalletError> {
        (**self).summary()
    }

    fn transactions(&self, count: usize) -> Result<Vec<WalletTransaction>, WalletError> {
        (**self).transactions(count)
    }
}
