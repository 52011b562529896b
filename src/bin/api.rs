use health_assessment_service::{
    api::start_server,
    catalog::INDIA,
    completion::AnthropicClient,
    config::{AppConfig, Strategy},
    geo::GeocoderClient,
    AssessmentService,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    info!("Health Assessment Service - API Server");
    info!("Port: {}", config.port);
    info!(
        "Strategy: {}",
        match config.strategy {
            Strategy::Remote => "remote completion API",
            Strategy::Local => "local keyword classifier",
        }
    );

    // Create components
    let completion = AnthropicClient::new(&config.completion)?;
    info!("Completion model: {}", completion.model());

    let service = Arc::new(AssessmentService::new(
        config.strategy,
        Arc::new(completion),
        &INDIA,
    ));
    let places = Arc::new(GeocoderClient::new(&config.geocoder)?);

    info!("Starting API server...");

    start_server(service, places, config.port).await?;

    Ok(())
}
