use serde::{Deserialize, Serialize};

/// Inbound payment as decoded from the request body.
///
/// Missing fields decode to their empty value so that the validator can
/// report them as required instead of the extractor rejecting the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequest {
    pub first_name: String,
    pub last_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub amount: f64,
    pub currency_code: String,
    pub cvv: String,
}

impl PaymentRequest {
    pub fn trim_whitespace(&mut self) {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.card_number,
            &mut self.expiry_date,
            &mut self.currency_code,
            &mut self.cvv,
        ] {
            *field = field.trim().to_string();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "payment_paid")]
    Paid,
    #[serde(rename = "payment_declined")]
    Declined,
}

impl PaymentStatus {
    pub fn status_code(self) -> u32 {
        match self {
            PaymentStatus::Paid => 10000,
            PaymentStatus::Declined => 50280,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Approved",
            PaymentStatus::Declined => "Insufficient funds",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "payment_paid",
            PaymentStatus::Declined => "payment_declined",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A settled payment as held in the ledger. The card number is always masked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub amount: f64,
    pub currency_code: String,
    pub status: PaymentStatus,
    pub status_code: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub status: PaymentStatus,
    pub response_summary: String,
}
