use stakewatch_types::TxId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("wallet query failed: {0}")]
    Wallet(#[from] stakewatch_wallet::WalletError),

    #[error("checkpoint store error: {0}")]
    Store(#[from] stakewatch_store::StoreError),

    #[error("notification for stake {txid} failed: {source}")]
    Notification {
        txid: TxId,
        #[source]
        source: stakewatch_notify::NotifyError,
    },

    #[error("config error: {0}")]
    Config(String),
}
