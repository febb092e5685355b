//! Typed shapes of the wallet's JSON responses.
//!
//! Only the fields the checker consumes are declared; everything else the
//! wallet returns is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::{Amount, Timestamp, TxId};

/// Category label the wallet assigns to stake rewards.
pub const STAKE_CATEGORY: &str = "mint";

/// The subset of `getwalletinfo` the checker needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// Wallet-wide transaction counter.
    pub txcount: u64,
    /// Balance of rewards that have not matured yet.
    #[serde(default)]
    pub immature_balance: Amount,
}

/// One entry of `listtransactions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub txid: TxId,
    pub time: Timestamp,
    pub amount: Amount,
    #[serde(default)]
    pub address: Option<String>,
    pub category: String,
}

impl WalletTransaction {
    pub fn is_stake(&self) -> bool {
        self.category == STAKE_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_ignores_unknown_fields() {
        let json = r#"{
            "walletversion": 60000,
            "balance": 1000.5,
            "immature_balance": 12.0,
            "txcount": 11,
            "keypoololdest": 1600000000
        }"#;
        let summary: WalletSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.txcount, 11);
        assert_eq!(summary.immature_balance, Amount::from_units(1_200_000_000));
    }

    #[test]
    fn summary_requires_txcount() {
        let json = r#"{"immature_balance": 0}"#;
        assert!(serde_json::from_str::<WalletSummary>(json).is_err());
    }

    #[test]
    fn listing_entry_without_address() {
        let json = r#"{
            "account": "",
            "category": "send",
            "amount": -3.25,
            "txid": "ff00",
            "time": 1700000100,
            "confirmations": 4
        }"#;
        let tx: WalletTransaction = serde_json::from_str(json).unwrap();
        assert!(!tx.is_stake());
        assert_eq!(tx.address, None);
        assert_eq!(tx.amount.units(), -325_000_000);
    }
}
