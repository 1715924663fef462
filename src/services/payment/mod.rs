pub mod interface;
pub mod masking;
pub mod service;
pub mod simulator;
pub mod store;
pub mod validator;

pub use interface::{LedgerError, PaymentError, PaymentLedger};
pub use service::PaymentService;
pub use store::PaymentStore;
