use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

pub struct GetCategoryByIdParams {
    pub id: Uuid,
}

/// Absence is a valid outcome; the caller decides whether it is an error.
#[async_trait]
pub trait GetCategoryByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryByIdParams)
    -> Result<Option<Category>, CategoryError>;
}
