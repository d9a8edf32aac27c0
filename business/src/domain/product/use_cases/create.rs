use async_trait::async_trait;

use crate::domain::access::Caller;
use crate::domain::product::draft::ProductDraft;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::storage::ImageFile;

pub struct CreateProductParams {
    pub caller: Caller,
    pub draft: ProductDraft,
    pub image: ImageFile,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
