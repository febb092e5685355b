//! The reconciliation engine: one polling cycle per call.

use tracing::{debug, error, info, info_span, warn, Dispatch};

use stakewatch_notify::{NotificationSender, StakeNotification};
use stakewatch_store::{Checkpoint, CheckpointStore};
use stakewatch_types::TxId;
use stakewatch_wallet::{WalletError, WalletQuery};

use crate::{ReconcileError, StakeTransactions};

/// Number of most recent wallet transactions inspected per cycle.
///
/// A stake followed by more than this many other transactions between two
/// cycles falls out of the window and is never notified.
pub const DEFAULT_WINDOW: usize = 50;

/// How a cycle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The wallet process is not running; nothing was read or written.
    Unavailable,
    /// The transaction counter matches the checkpoint; nothing was written.
    NoChange { txcount: u64 },
    /// The counter moved: new stakes (possibly none) were delivered and the
    /// checkpoint was committed.
    Reconciled {
        notified: Vec<TxId>,
        checkpoint: Checkpoint,
    },
}

/// Runs polling cycles against a wallet, a notifier and a checkpoint store.
///
/// Cycles are expected to run one at a time; concurrent cycles sharing a
/// checkpoint are not supported.
pub struct StakeChecker<W, N, S> {
    wallet: W,
    notifier: N,
    store: S,
    window: usize,
    log_sink: Option<Dispatch>,
}

impl<W, N, S> StakeChecker<W, N, S>
where
    W: WalletQuery,
    N: NotificationSender,
    S: CheckpointStore,
{
    pub fn new(wallet: W, notifier: N, store: S) -> Self {
        Self {
            wallet,
            notifier,
            store,
            window: DEFAULT_WINDOW,
            log_sink: None,
        }
    }

    /// Inspect the `window` most recent wallet transactions per cycle.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Send this checker's log events to `sink` instead of the global subscriber.
    pub fn with_log_sink(mut self, sink: Dispatch) -> Self {
        self.log_sink = Some(sink);
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one polling cycle to completion.
    ///
    /// On error nothing has been committed: stakes delivered before a failed
    /// delivery are sent again by the next cycle.
    pub fn run_cycle(&self) -> Result<CycleOutcome, ReconcileError> {
        match &self.log_sink {
            Some(sink) => tracing::dispatcher::with_default(sink, || self.cycle()),
            None => self.cycle(),
        }
    }

    fn cycle(&self) -> Result<CycleOutcome, ReconcileError> {
        let span = info_span!("stake_cycle", window = self.window);
        let _enter = span.enter();

        let summary = match self.wallet.summary() {
            Ok(summary) => summary,
            Err(e) if e.is_unavailable() => return Ok(self.unavailable(&e)),
            Err(e) => {
                error!(operation = "getwalletinfo", error = %e, "wallet query failed");
                return Err(e.into());
            }
        };
        debug!(
            txcount = summary.txcount,
            immature_balance = %summary.immature_balance,
            "wallet summary"
        );

        let checkpoint = self.store.load()?;
        if !checkpoint.counter_changed(summary.txcount) {
            debug!(txcount = summary.txcount, "transaction counter unchanged");
            return Ok(CycleOutcome::NoChange {
                txcount: summary.txcount,
            });
        }
        info!(
            previous = %checkpoint.last_transaction_count,
            current = summary.txcount,
            "transaction counter changed"
        );

        let listing = match self.wallet.transactions(self.window) {
            Ok(listing) => listing,
            Err(e) if e.is_unavailable() => return Ok(self.unavailable(&e)),
            Err(e) => {
                error!(operation = "listtransactions", error = %e, "wallet query failed");
                return Err(e.into());
            }
        };
        let stakes = StakeTransactions::from_wallet_listing(listing);

        let anchor = &checkpoint.last_stake_id;
        if !stakes.is_empty() && stakes.find_by_id(anchor).is_none() {
            warn!(
                anchor = %anchor,
                stakes_in_window = stakes.len(),
                "last acknowledged stake is not in the window; no stake is treated as new"
            );
        }

        let fresh = stakes.new_since(anchor);
        let mut notified = Vec::with_capacity(fresh.len());
        for stake in fresh {
            let notification = StakeNotification::from(stake);
            if let Err(source) = self.notifier.send(&notification) {
                error!(
                    txid = %stake.id(),
                    error = %source,
                    "stake notification failed, checkpoint not committed"
                );
                return Err(ReconcileError::Notification {
                    txid: stake.id().clone(),
                    source,
                });
            }
            info!(
                txid = %stake.id(),
                time = stake.timestamp().as_secs(),
                amount = %stake.amount(),
                address = stake.address().unwrap_or_default(),
                "new stake"
            );
            notified.push(stake.id().clone());
        }

        let last_stake_id = match stakes.last_id() {
            id if id.is_empty() => checkpoint.last_stake_id.clone(),
            id => id,
        };
        let next = Checkpoint::new(summary.txcount.to_string(), last_stake_id);
        self.store.save(&next)?;
        info!(
            txcount = %next.last_transaction_count,
            last_stake = %next.last_stake_id,
            notified = notified.len(),
            "checkpoint committed"
        );

        Ok(CycleOutcome::Reconciled {
            notified,
            checkpoint: next,
        })
    }

    fn unavailable(&self, e: &WalletError) -> CycleOutcome {
        error!(error = %e, "wallet unavailable, skipping cycle");
        CycleOutcome::Unavailable
    }
}
