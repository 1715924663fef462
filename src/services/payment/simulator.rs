use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::models::payment::PaymentStatus;

pub const DEFAULT_APPROVAL_THRESHOLD: f64 = 800.0;

const ID_PREFIX: &str = "PAY-";

/// Issues `PAY-<nanos>` identifiers.
///
/// The numeric part follows the wall clock but never repeats: when two calls
/// land on the same nanosecond (or the clock steps back) the previous value
/// is bumped by one.
#[derive(Debug, Default)]
pub struct PaymentIdGenerator {
    last: AtomicU64,
}

impl PaymentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or_default().max(0) as u64;
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        format!("{}{}", ID_PREFIX, now.max(prev + 1))
    }
}

/// Result of a simulated settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub id: String,
    pub status: PaymentStatus,
    pub status_code: u32,
    pub summary: &'static str,
}

/// Stand-in for the acquiring bank. Amounts up to the threshold are
/// approved, anything above it is declined for insufficient funds.
#[derive(Debug)]
pub struct BankSimulator {
    threshold: f64,
    ids: PaymentIdGenerator,
}

impl BankSimulator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ids: PaymentIdGenerator::new(),
        }
    }

    pub fn simulate(&self, amount: f64) -> Outcome {
        let status = if amount <= self.threshold {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Declined
        };

        Outcome {
            id: self.ids.next_id(),
            status,
            status_code: status.status_code(),
            summary: status.summary(),
        }
    }
}

impl Default for BankSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVAL_THRESHOLD)
    }
}
