use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::query::Page;

#[derive(Debug, Clone, Object)]
pub struct ProductIdResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Configuration name to `{ priceType, availableOptions }`
    pub price_configuration: serde_json::Value,
    /// Ordered `{ name, value }` options
    pub attributes: serde_json::Value,
    pub tenant_id: String,
    pub category_id: Uuid,
    pub is_publish: bool,
    /// Public URI of the product image
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price_configuration: serde_json::to_value(&product.price_configuration)
                .unwrap_or_default(),
            attributes: serde_json::to_value(&product.attributes).unwrap_or_default(),
            tenant_id: product.tenant_id.to_string(),
            category_id: product.category_id,
            is_publish: product.is_publish,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub data: Vec<ProductResponse>,
    pub total: u64,
    pub page_size: u32,
    pub current_page: u32,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            data: page.data.into_iter().map(ProductResponse::from).collect(),
            total: page.total,
            page_size: page.page_size,
            current_page: page.current_page,
        }
    }
}
