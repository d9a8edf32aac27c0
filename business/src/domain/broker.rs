use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    #[error("broker.not_connected")]
    NotConnected,
    #[error("broker.connection_failed")]
    ConnectionFailed,
    #[error("broker.publish_failed")]
    PublishFailed,
}

/// Port for publishing messages to downstream consumers.
///
/// Implementations are shared by every in-flight request, so `send_message`
/// must be safe to call concurrently after a single `connect`.
#[async_trait]
pub trait MessageProducerBroker: Send + Sync {
    async fn connect(&self) -> Result<(), BrokerError>;
    async fn disconnect(&self) -> Result<(), BrokerError>;
    /// Fails with [`BrokerError::NotConnected`] when called before `connect`.
    async fn send_message(&self, topic: &str, message: &str) -> Result<(), BrokerError>;
}
