use async_trait::async_trait;
use redis::Client;
use redis::aio::ConnectionManager;
use tokio::sync::RwLock;

use business::domain::broker::{BrokerError, MessageProducerBroker};

/// Field under which the serialized payload is stored in each stream entry.
const MESSAGE_FIELD: &str = "message";

/// Publishes messages as Redis Stream entries, one stream per topic.
///
/// The connection is opened once at startup and shared by every request;
/// `ConnectionManager` reconnects on its own after transient failures.
pub struct RedisStreamBroker {
    url: String,
    max_length: i64,
    connection: RwLock<Option<ConnectionManager>>,
}

impl RedisStreamBroker {
    pub fn new(url: impl Into<String>, max_length: i64) -> Self {
        Self {
            url: url.into(),
            max_length,
            connection: RwLock::new(None),
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.read().await.is_some()
    }
}

#[async_trait]
impl MessageProducerBroker for RedisStreamBroker {
    async fn connect(&self) -> Result<(), BrokerError> {
        let client = Client::open(self.url.as_str()).map_err(|err| {
            tracing::error!(error = %err, "Invalid broker URL");
            BrokerError::ConnectionFailed
        })?;
        let mut manager = ConnectionManager::new(client).await.map_err(|err| {
            tracing::error!(error = %err, "Could not reach broker");
            BrokerError::ConnectionFailed
        })?;

        let _: String = redis::cmd("PING")
            .query_async(&mut manager)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Broker did not answer PING");
                BrokerError::ConnectionFailed
            })?;

        *self.connection.write().await = Some(manager);
        tracing::info!("Connected to broker");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BrokerError> {
        if self.connection.write().await.take().is_some() {
            tracing::info!("Disconnected from broker");
        }
        Ok(())
    }

    async fn send_message(&self, topic: &str, message: &str) -> Result<(), BrokerError> {
        let mut conn = self
            .connection
            .read()
            .await
            .clone()
            .ok_or(BrokerError::NotConnected)?;

        let entry_id: String = redis::cmd("XADD")
            .arg(topic)
            .arg("MAXLEN")
            .arg("~")
            .arg(self.max_length)
            .arg("*")
            .arg(MESSAGE_FIELD)
            .arg(message)
            .query_async(&mut conn)
            .await
            .map_err(|err| {
                tracing::warn!(topic, error = %err, "XADD failed");
                BrokerError::PublishFailed
            })?;

        tracing::debug!(topic, entry_id = %entry_id, "Message published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_refuse_send_before_connect() {
        let broker = RedisStreamBroker::new("redis://127.0.0.1:6379", 1_000);

        let result = broker.send_message("product", "{}").await;

        assert!(matches!(result, Err(BrokerError::NotConnected)));
    }

    #[tokio::test]
    async fn should_fail_connect_on_malformed_url() {
        let broker = RedisStreamBroker::new("not a redis url", 1_000);

        let result = broker.connect().await;

        assert!(matches!(result, Err(BrokerError::ConnectionFailed)));
        assert!(!broker.is_connected().await);
    }

    #[tokio::test]
    async fn should_allow_disconnect_when_never_connected() {
        let broker = RedisStreamBroker::new("redis://127.0.0.1:6379", 1_000);
        assert!(broker.disconnect().await.is_ok());
    }
}
