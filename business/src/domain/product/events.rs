use serde::Serialize;
use uuid::Uuid;

use super::model::Product;
use super::value_objects::PriceConfiguration;

/// Topic receiving product change notifications.
pub const PRODUCT_TOPIC: &str = "product";

/// Snapshot published whenever a product is created or updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChangedEvent {
    pub id: Uuid,
    pub price_configuration: PriceConfiguration,
}

impl From<&Product> for ProductChangedEvent {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            price_configuration: product.price_configuration.clone(),
        }
    }
}

impl ProductChangedEvent {
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
