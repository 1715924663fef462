#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, web};
use serde_json::{json, Value};

use payment_gateway_api::{app::create_app, config::AppConfig, services::payment::PaymentService};

pub struct TestApp {
    pub service: web::Data<PaymentService>,
    pub config: AppConfig,
}

impl TestApp {
    /// Fresh ledger per call so tests never share payments.
    pub fn new() -> Self {
        let config = AppConfig::default();
        let service = web::Data::new(PaymentService::in_memory(config.approval_threshold));

        Self { service, config }
    }

    pub fn with_threshold(approval_threshold: f64) -> Self {
        let config = AppConfig {
            approval_threshold,
            ..AppConfig::default()
        };
        let service = web::Data::new(PaymentService::in_memory(approval_threshold));

        Self { service, config }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        create_app(self.service.clone(), &self.config)
    }
}

pub fn valid_payment() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "cardNumber": "4111111111111111",
        "expiryDate": "12/29",
        "amount": 500,
        "currencyCode": "GBP",
        "cvv": "123"
    })
}

pub fn payment_with(field: &str, value: Value) -> Value {
    let mut payment = valid_payment();
    payment[field] = value;
    payment
}
