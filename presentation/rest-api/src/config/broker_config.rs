use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use broker::RedisStreamBroker;
use business::application::product::publisher::PublishRetry;
use business::domain::broker::MessageProducerBroker;

use super::env_or;

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub url: String,
    pub stream_max_length: i64,
    pub retry: PublishRetry,
}

impl BrokerConfig {
    /// Environment variables:
    /// - BROKER_URL (default: "redis://127.0.0.1:6379")
    /// - BROKER_STREAM_MAX_LENGTH: approximate cap per stream (default: 100000)
    /// - EVENT_PUBLISH_ATTEMPTS (default: 3)
    /// - EVENT_PUBLISH_BACKOFF_MS (default: 200)
    pub fn from_env() -> Self {
        let defaults = PublishRetry::default();
        Self {
            url: env::var("BROKER_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            stream_max_length: env_or("BROKER_STREAM_MAX_LENGTH", 100_000),
            retry: PublishRetry {
                attempts: env_or("EVENT_PUBLISH_ATTEMPTS", defaults.attempts),
                backoff: Duration::from_millis(env_or(
                    "EVENT_PUBLISH_BACKOFF_MS",
                    defaults.backoff.as_millis() as u64,
                )),
            },
        }
    }
}

/// Connects the broker once at startup; the connection is shared by all requests.
pub async fn init_broker(config: &BrokerConfig) -> anyhow::Result<Arc<RedisStreamBroker>> {
    let broker = Arc::new(RedisStreamBroker::new(
        config.url.clone(),
        config.stream_max_length,
    ));
    broker
        .connect()
        .await
        .with_context(|| format!("connecting to broker at {}", config.url))?;
    Ok(broker)
}
