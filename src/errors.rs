use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::payment::validator::Violation;
use crate::services::payment::PaymentError;

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request payload")]
    MalformedPayload,
    #[error("Invalid id provided")]
    InvalidId,
    #[error("Validation failed")]
    Validation(Vec<Violation>),
    #[error("Payment not found")]
    NotFound,
    #[error("No payments available")]
    NoPayments,
    #[error("Something went wrong. Please try again later.")]
    Internal(String),
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Validation(violations) => ApiError::Validation(violations),
            PaymentError::InvalidId => ApiError::InvalidId,
            PaymentError::NotFound(_) => ApiError::NotFound,
            PaymentError::NoPayments => ApiError::NoPayments,
            PaymentError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound | ApiError::NoPayments => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            error!("Internal server error: {}", detail);
        }

        let status = self.status_code();
        let errors = match self {
            ApiError::Validation(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            _ => Vec::new(),
        };

        HttpResponse::build(status).json(ErrorResponse {
            status_code: status.as_u16(),
            message: self.to_string(),
            errors,
        })
    }
}

/// Extractor config that turns undecodable bodies into the 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        debug!("Rejected payload for {}: {}", req.path(), err);
        ApiError::MalformedPayload.into()
    })
}
