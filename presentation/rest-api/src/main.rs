use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use business::domain::broker::MessageProducerBroker;
use config::{app_config::AppConfig, broker_config, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// - config/: environment-driven settings per concern
/// - setup/: dependency injection and server wiring
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;

    let pool = database_config::init_database().await?;
    let broker = broker_config::init_broker(&config.broker).await?;

    let container = DependencyContainer::new(pool, broker.clone(), &config);

    let served = Server::run(config, container).await;

    // Runs even when the server stopped on an error.
    if let Err(err) = broker.disconnect().await {
        tracing::warn!("Broker disconnect failed: {err}");
    }
    served
}
