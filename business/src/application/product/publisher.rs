use std::sync::Arc;
use std::time::Duration;

use crate::domain::broker::{BrokerError, MessageProducerBroker};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::events::{PRODUCT_TOPIC, ProductChangedEvent};
use crate::domain::product::model::Product;

/// How often a change notification is attempted before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishRetry {
    pub attempts: u32,
    pub backoff: Duration,
}

impl Default for PublishRetry {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Duration::from_millis(200),
        }
    }
}

/// Publishes product change notifications with a bounded retry.
///
/// The stored record is never rolled back when every attempt fails; the
/// error surfaces to the caller and is logged so the event can be replayed.
pub struct ProductEventPublisher {
    pub broker: Arc<dyn MessageProducerBroker>,
    pub logger: Arc<dyn Logger>,
    pub retry: PublishRetry,
}

impl ProductEventPublisher {
    pub async fn publish_changed(&self, product: &Product) -> Result<(), ProductError> {
        let payload = ProductChangedEvent::from(product)
            .to_payload()
            .map_err(|_| ProductError::EventPublish(BrokerError::PublishFailed))?;

        let attempts = self.retry.attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.broker.send_message(PRODUCT_TOPIC, &payload).await {
                Ok(()) => {
                    self.logger.debug(&format!(
                        "Published {} event for product {}",
                        PRODUCT_TOPIC, product.id
                    ));
                    return Ok(());
                }
                Err(err) if attempt < attempts => {
                    self.logger.warn(&format!(
                        "Publishing event for product {} failed (attempt {}/{}): {}",
                        product.id, attempt, attempts, err
                    ));
                    attempt += 1;
                    tokio::time::sleep(self.retry.backoff).await;
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Giving up on event for product {} after {} attempts: {}",
                        product.id, attempts, err
                    ));
                    return Err(ProductError::EventPublish(err));
                }
            }
        }
    }
}
