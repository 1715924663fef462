use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use crate::config::AppConfig;
use crate::middleware::{cors::cors_policy, secure_headers::SecureHeaders};
use crate::routes;
use crate::services::payment::PaymentService;

/// Builds the application around a shared payment service. Each worker calls
/// this with a clone of the same `web::Data`, so all workers see one ledger.
pub fn create_app(
    service: web::Data<PaymentService>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(service)
        .wrap(cors_policy(config))
        .wrap(SecureHeaders)
        .wrap(Logger::default())
        .configure(routes::configure)
}
