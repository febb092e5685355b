//! Validation errors raised while turning wallet data into typed records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("transaction {txid} is not a stake (category {category:?})")]
    NotAStake { txid: String, category: String },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
