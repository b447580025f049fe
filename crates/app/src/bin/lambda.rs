//! Marketdesk API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tracing::info;

use marketdesk_app::{create_app, with_http_layers};
use marketdesk_common::config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing Marketdesk API Lambda");

    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    let app = create_app(&config)
        .map_err(|e| Error::from(format!("App initialization error: {}", e)))?;

    let app = with_http_layers(app, &config.cors_allowed_origins);

    info!("Marketdesk API Lambda ready to serve requests");

    run(app).await
}
