//! The stake transactions seen in one polling cycle.

use stakewatch_types::{StakeTransaction, TxId, TypesError, WalletTransaction};

/// Working set of stake transactions for one cycle.
///
/// Rebuilt from the wallet listing every cycle and never persisted. Inserts
/// are not deduplicated; lookups by id return the first match in insertion
/// order.
#[derive(Clone, Debug, Default)]
pub struct StakeTransactions {
    records: Vec<StakeTransaction>,
}

impl StakeTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the stake entries of a wallet listing.
    pub fn from_wallet_listing(listing: impl IntoIterator<Item = WalletTransaction>) -> Self {
        listing
            .into_iter()
            .filter_map(|tx| StakeTransaction::try_from(tx).ok())
            .collect()
    }

    pub fn push(&mut self, stake: StakeTransaction) {
        self.records.push(stake);
    }

    /// Validate a raw listing entry and add it.
    pub fn try_push(&mut self, tx: WalletTransaction) -> Result<(), TypesError> {
        self.records.push(StakeTransaction::try_from(tx)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StakeTransaction> {
        self.records.iter()
    }

    /// Records ordered by timestamp, oldest first.
    ///
    /// The sort is stable: equal timestamps keep insertion order.
    pub fn sorted_ascending(&self) -> Vec<&StakeTransaction> {
        let mut sorted: Vec<&StakeTransaction> = self.records.iter().collect();
        sorted.sort_by_key(|s| s.timestamp());
        sorted
    }

    pub fn find_by_id(&self, id: &TxId) -> Option<&StakeTransaction> {
        self.records.iter().find(|s| s.id() == id)
    }

    pub fn ids_ascending(&self) -> Vec<&TxId> {
        self.sorted_ascending().into_iter().map(|s| s.id()).collect()
    }

    /// Id of the most recent stake, or the empty id when there is none.
    pub fn last_id(&self) -> TxId {
        self.sorted_ascending()
            .last()
            .map(|s| s.id().clone())
            .unwrap_or_default()
    }

    /// Stakes strictly newer than the anchor `last_known`, oldest first.
    ///
    /// An empty or unknown anchor yields nothing: without a reference point
    /// no stake is claimed as new.
    pub fn new_since(&self, last_known: &TxId) -> Vec<&StakeTransaction> {
        if last_known.is_empty() {
            return Vec::new();
        }
        let Some(anchor) = self.find_by_id(last_known) else {
            return Vec::new();
        };
        let since = anchor.timestamp();
        self.sorted_ascending()
            .into_iter()
            .filter(|s| s.timestamp() > since)
            .collect()
    }
}

impl FromIterator<StakeTransaction> for StakeTransactions {
    fn from_iter<I: IntoIterator<Item = StakeTransaction>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
