use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::draft::ProductDraft;
use super::value_objects::{PriceConfiguration, ProductAttributes};
use crate::domain::shared::value_objects::TenantId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_configuration: PriceConfiguration,
    pub attributes: ProductAttributes,
    pub tenant_id: TenantId,
    pub category_id: Uuid,
    pub is_publish: bool,
    /// Storage key of the product image.
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(draft: ProductDraft, image: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price_configuration: draft.price_configuration,
            attributes: draft.attributes,
            tenant_id: draft.tenant_id,
            category_id: draft.category_id,
            is_publish: draft.is_publish,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field, keeping identity and creation time.
    pub fn apply_update(self, draft: ProductDraft, image: String) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            price_configuration: draft.price_configuration,
            attributes: draft.attributes,
            tenant_id: draft.tenant_id,
            category_id: draft.category_id,
            is_publish: draft.is_publish,
            image,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price_configuration: PriceConfiguration,
        attributes: ProductAttributes,
        tenant_id: TenantId,
        category_id: Uuid,
        is_publish: bool,
        image: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price_configuration,
            attributes,
            tenant_id,
            category_id,
            is_publish,
            image,
            created_at,
            updated_at,
        }
    }
}
