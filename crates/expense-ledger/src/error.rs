//! Ledger Errors

use thiserror::Error;

/// Common result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Not found: expense #{0}")]
    NotFound(u32),
    #[error("No expense ids left to assign")]
    IdsExhausted,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}
