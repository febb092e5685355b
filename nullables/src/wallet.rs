//! Nullable wallet — scripted wallet responses for testing.

use stakewatch_types::{Amount, Timestamp, TxId, WalletSummary, WalletTransaction};
use stakewatch_wallet::{WalletError, WalletQuery};
use std::cell::{Cell, RefCell};

/// Process name reported in `Unavailable` errors.
const NULL_PROCESS: &str = "null-verusd";

/// A wallet whose summary and transaction history are set by the test.
///
/// `transactions(n)` returns the last `n` entries of the history, oldest
/// first, like the real `listtransactions`.
pub struct NullWallet {
    available: Cell<bool>,
    txcount: Cell<u64>,
    immature_balance: Cell<Amount>,
    history: RefCell<Vec<WalletTransaction>>,
    listing_error: RefCell<Option<String>>,
    summary_calls: Cell<usize>,
    listing_calls: Cell<usize>,
}

impl NullWallet {
    /// A running wallet with an empty history and the given counter.
    pub fn new(txcount: u64) -> Self {
        Self {
            available: Cell::new(true),
            txcount: Cell::new(txcount),
            immature_balance: Cell::new(Amount::ZERO),
            history: RefCell::new(Vec::new()),
            listing_error: RefCell::new(None),
            summary_calls: Cell::new(0),
            listing_calls: Cell::new(0),
        }
    }

    /// A wallet whose process is not running.
    pub fn unavailable() -> Self {
        let wallet = Self::new(0);
        wallet.available.set(false);
        wallet
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn set_immature_balance(&self, amount: Amount) {
        self.immature_balance.set(amount);
    }

    /// Append a transaction to the history and bump the counter.
    pub fn record(&self, tx: WalletTransaction) {
        self.history.borrow_mut().push(tx);
        self.txcount.set(self.txcount.get() + 1);
    }

    /// Make `listtransactions` fail with a command error.
    pub fn fail_listing(&self, stderr: Option<&str>) {
        *self.listing_error.borrow_mut() = stderr.map(str::to_string);
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.get()
    }

    pub fn listing_calls(&self) -> usize {
        self.listing_calls.get()
    }

    fn check_available(&self) -> Result<(), WalletError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(WalletError::Unavailable(NULL_PROCESS.to_string()))
        }
    }
}

impl WalletQuery for NullWallet {
    fn summary(&self) -> Result<WalletSummary, WalletError> {
        self.summary_calls.set(self.summary_calls.get() + 1);
        self.check_available()?;
        Ok(WalletSummary {
            txcount: self.txcount.get(),
            immature_balance: self.immature_balance.get(),
        })
    }

    fn transactions(&self, count: usize) -> Result<Vec<WalletTransaction>, WalletError> {
        self.listing_calls.set(self.listing_calls.get() + 1);
        self.check_available()?;
        if let Some(stderr) = self.listing_error.borrow().as_ref() {
            return Err(WalletError::CommandFailed {
                command: "listtransactions".to_string(),
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            });
        }
        let history = self.history.borrow();
        let start = history.len().saturating_sub(count);
        Ok(history[start..].to_vec())
    }
}

/// A stake reward entry.
pub fn mint(txid: &str, time: u64, coins: f64) -> WalletTransaction {
    WalletTransaction {
        txid: TxId::from(txid),
        time: Timestamp::new(time),
        amount: Amount::from_coins(coins).unwrap_or_default(),
        address: Some("RStakeRewardAddress".to_string()),
        category: "mint".to_string(),
    }
}

/// A non-stake entry of the given category (`receive`, `send`, ...).
pub fn non_stake(txid: &str, time: u64, category: &str, coins: f64) -> WalletTransaction {
    WalletTransaction {
        txid: TxId::from(txid),
        time: Timestamp::new(time),
        amount: Amount::from_coins(coins).unwrap_or_default(),
        address: Some("RCounterpartyAddress".to_string()),
        category: category.to_string(),
    }
}
