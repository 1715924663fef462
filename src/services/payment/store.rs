use std::collections::HashMap;

use parking_lot::Mutex;

use crate::models::payment::PaymentRecord;
use crate::services::payment::interface::{LedgerError, PaymentLedger};

/// In-memory ledger of settled payments, keyed by payment id.
///
/// A single lock guards the map. Every operation holds it only for the map
/// access itself, and records are cloned out so callers never see the map.
#[derive(Debug, Default)]
pub struct PaymentStore {
    payments: Mutex<HashMap<String, PaymentRecord>>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.payments.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.lock().is_empty()
    }
}

impl PaymentLedger for PaymentStore {
    fn put(&self, id: String, record: PaymentRecord) {
        self.payments.lock().insert(id, record);
    }

    fn get(&self, id: &str) -> Result<PaymentRecord, LedgerError> {
        self.payments
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<PaymentRecord>, LedgerError> {
        let payments = self.payments.lock();
        if payments.is_empty() {
            return Err(LedgerError::Empty);
        }
        Ok(payments.values().cloned().collect())
    }
}
