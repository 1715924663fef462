use log::{info, warn};

use crate::models::payment::{PaymentRecord, PaymentRequest, PaymentResponse};
use crate::services::payment::interface::{PaymentError, PaymentLedger};
use crate::services::payment::masking::mask_card_number;
use crate::services::payment::simulator::BankSimulator;
use crate::services::payment::store::PaymentStore;
use crate::services::payment::validator::validate;

pub struct PaymentService<L: PaymentLedger = PaymentStore> {
    ledger: L,
    bank: BankSimulator,
}

impl PaymentService<PaymentStore> {
    /// Service backed by a fresh in-memory store.
    pub fn in_memory(approval_threshold: f64) -> Self {
        Self::new(PaymentStore::new(), BankSimulator::new(approval_threshold))
    }
}

impl<L: PaymentLedger> PaymentService<L> {
    pub fn new(ledger: L, bank: BankSimulator) -> Self {
        Self { ledger, bank }
    }

    #[cfg(test)]
    pub(crate) fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Validates, settles and records a payment.
    ///
    /// A declined payment is still a settled payment: it is stored and
    /// returned as `Ok`. Only validation failures return an error, and they
    /// leave the ledger untouched.
    pub fn process_payment(
        &self,
        mut request: PaymentRequest,
    ) -> Result<PaymentResponse, PaymentError> {
        request.trim_whitespace();

        if let Err(violations) = validate(&request) {
            warn!(
                "Rejected payment request with {} invalid field(s)",
                violations.len()
            );
            return Err(PaymentError::Validation(violations));
        }

        let outcome = self.bank.simulate(request.amount);

        let record = PaymentRecord {
            id: outcome.id.clone(),
            first_name: request.first_name,
            last_name: request.last_name,
            card_number: mask_card_number(&request.card_number),
            expiry_date: request.expiry_date,
            amount: request.amount,
            currency_code: request.currency_code,
            status: outcome.status,
            status_code: outcome.status_code,
        };
        self.ledger.put(outcome.id.clone(), record);

        info!("Stored payment {} with status {}", outcome.id, outcome.status);

        Ok(PaymentResponse {
            id: outcome.id,
            status: outcome.status,
            response_summary: outcome.summary.to_string(),
        })
    }

    pub fn retrieve_payment(&self, id: &str) -> Result<PaymentRecord, PaymentError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(PaymentError::InvalidId);
        }

        Ok(self.ledger.get(id)?)
    }

    pub fn list_payments(&self) -> Result<Vec<PaymentRecord>, PaymentError> {
        Ok(self.ledger.list()?)
    }
}
