use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::query::{Page, ProductSearch};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    /// Overwrites the stored record; `RepositoryError::NotFound` if it vanished.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn search(&self, search: &ProductSearch) -> Result<Page<Product>, RepositoryError>;
}
