//! The stake transaction record.

use serde::Serialize;

use crate::{Amount, Timestamp, TxId, TypesError, WalletTransaction};

/// One observed stake reward (a `mint` entry in the wallet's listing).
///
/// Immutable once constructed. Two records with the same id describe the
/// same wallet event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StakeTransaction {
    id: TxId,
    timestamp: Timestamp,
    amount: Amount,
    /// Receiving address; the wallet omits it on some entries.
    address: Option<String>,
}

impl StakeTransaction {
    pub fn new(
        id: impl Into<TxId>,
        timestamp: Timestamp,
        amount: Amount,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            amount,
            address: Some(address.into()),
        }
    }

    pub fn id(&self) -> &TxId {
        &self.id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl TryFrom<WalletTransaction> for StakeTransaction {
    type Error = TypesError;

    fn try_from(tx: WalletTransaction) -> Result<Self, Self::Error> {
        if !tx.is_stake() {
            return Err(TypesError::NotAStake {
                txid: tx.txid.to_string(),
                category: tx.category,
            });
        }
        Ok(Self {
            id: tx.txid,
            timestamp: tx.time,
            amount: tx.amount,
            address: tx.address,
        })
    }
}
