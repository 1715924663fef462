use thiserror::Error;

use crate::models::payment::PaymentRecord;
use crate::services::payment::validator::Violation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("payment {0} not found")]
    NotFound(String),
    #[error("ledger is empty")]
    Empty,
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("invalid payment id")]
    InvalidId,
    #[error("payment {0} not found")]
    NotFound(String),
    #[error("no payments available")]
    NoPayments,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<LedgerError> for PaymentError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(id) => PaymentError::NotFound(id),
            LedgerError::Empty => PaymentError::NoPayments,
            LedgerError::Unavailable(reason) => PaymentError::Internal(reason),
        }
    }
}

/// Storage seam for settled payments. Implementations must be safe to share
/// across worker threads and must never expose a half-written record.
///
/// `put` cannot fail. Reads may report `Unavailable` when the backing store
/// cannot be reached; the in-memory store never does.
pub trait PaymentLedger: Send + Sync {
    fn put(&self, id: String, record: PaymentRecord);
    fn get(&self, id: &str) -> Result<PaymentRecord, LedgerError>;
    fn list(&self) -> Result<Vec<PaymentRecord>, LedgerError>;
}
