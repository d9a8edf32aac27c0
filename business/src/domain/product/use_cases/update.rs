use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::access::Caller;
use crate::domain::product::draft::ProductDraft;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::storage::ImageFile;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub caller: Caller,
    pub draft: ProductDraft,
    /// Replacement image; the current one is kept when absent.
    pub image: Option<ImageFile>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
