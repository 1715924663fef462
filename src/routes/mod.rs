use actix_web::web;

use crate::errors::json_config;
use crate::services::payment::PaymentStore;

pub mod health;
pub mod payment;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api/v1")
            .route("/payments", web::post().to(payment::process_payment::<PaymentStore>))
            .route("/payments", web::get().to(payment::all_payments::<PaymentStore>))
            .route("/payments/{id}", web::get().to(payment::retrieve_payment::<PaymentStore>))
            .route("/health", web::get().to(health::health_check)),
    );
}
