use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::{Page, ProductSearch};

/// Returned products carry a public image URI in place of the storage key.
#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, search: ProductSearch) -> Result<Page<Product>, ProductError>;
}
