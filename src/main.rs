use actix_web::{web, HttpServer};
use env_logger::Env;
use log::{error, info};

use payment_gateway_api::{app::create_app, config::AppConfig, services::payment::PaymentService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    info!(
        "Approving payments up to {} (simulated balance)",
        config.approval_threshold
    );

    let service = web::Data::new(PaymentService::in_memory(config.approval_threshold));

    info!("Starting server on {}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || create_app(service.clone(), &config))
        .bind(bind_addr)?
        .run()
        .await
}
