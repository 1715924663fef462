use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::AppConfig;

const MAX_AGE_SECS: usize = 3600;

pub fn cors_policy(config: &AppConfig) -> Cors {
    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(MAX_AGE_SECS)
}
