use actix_web::{http::StatusCode, web, HttpResponse};

use crate::errors::ApiError;
use crate::models::payment::{PaymentRequest, PaymentStatus};
use crate::services::payment::{PaymentLedger, PaymentService};

/*
    POST /api/v1/payments
*/
pub async fn process_payment<L: PaymentLedger + 'static>(
    service: web::Data<PaymentService<L>>,
    input: web::Json<PaymentRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = service.process_payment(input.into_inner())?;

    // A decline is a settled payment, reported with 402 rather than as an error
    let status = match response.status {
        PaymentStatus::Paid => StatusCode::CREATED,
        PaymentStatus::Declined => StatusCode::PAYMENT_REQUIRED,
    };

    Ok(HttpResponse::build(status).json(response))
}

/*
    GET /api/v1/payments/{id}
*/
pub async fn retrieve_payment<L: PaymentLedger + 'static>(
    service: web::Data<PaymentService<L>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let record = service.retrieve_payment(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(record))
}

/*
    GET /api/v1/payments
*/
pub async fn all_payments<L: PaymentLedger + 'static>(
    service: web::Data<PaymentService<L>>,
) -> Result<HttpResponse, ApiError> {
    let records = service.list_payments()?;
    Ok(HttpResponse::Ok().json(records))
}
