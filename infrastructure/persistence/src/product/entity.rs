use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::TenantId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_configuration: Json<serde_json::Value>,
    pub attributes: Json<serde_json::Value>,
    pub tenant_id: String,
    pub category_id: Uuid,
    pub is_publish: bool,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description,
            decode_document(self.id, self.price_configuration)?,
            decode_document(self.id, self.attributes)?,
            TenantId::new(self.tenant_id),
            self.category_id,
            self.is_publish,
            self.image,
            self.created_at,
            self.updated_at,
        ))
    }
}

fn decode_document<T: DeserializeOwned>(
    id: Uuid,
    document: Json<serde_json::Value>,
) -> Result<T, RepositoryError> {
    serde_json::from_value(document.0).map_err(|err| {
        tracing::error!(product_id = %id, error = %err, "Stored product document is unreadable");
        RepositoryError::CorruptedDocument
    })
}
