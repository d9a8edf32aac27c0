use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::product::publisher::ProductEventPublisher;
use crate::domain::access::{can_manage_products, can_write_product};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::storage::FileStorage;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn FileStorage>,
    pub publisher: Arc<ProductEventPublisher>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    async fn discard_image(&self, key: &str, reason: &str) {
        if let Err(err) = self.storage.delete(key).await {
            self.logger
                .warn(&format!("Orphaned image {} ({}): {}", key, reason, err));
        }
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let UpdateProductParams {
            id,
            caller,
            draft,
            image,
        } = params;

        self.logger.info(&format!("Updating product: {}", id));

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)?;

        // Both the current owner and the requested owner must be writable.
        if !can_manage_products(&caller).is_allowed()
            || !can_write_product(&caller, &existing.tenant_id).is_allowed()
            || !can_write_product(&caller, &draft.tenant_id).is_allowed()
        {
            self.logger.warn(&format!(
                "User {} may not update product {} of tenant {}",
                caller.user_id, id, existing.tenant_id
            ));
            return Err(ProductError::Forbidden);
        }

        let previous_image = existing.image.clone();
        let new_image = match image {
            Some(file) => {
                let key = Uuid::new_v4().to_string();
                self.storage.upload(&key, file).await?;
                Some(key)
            }
            None => None,
        };

        let merged = existing.apply_update(
            draft,
            new_image.clone().unwrap_or_else(|| previous_image.clone()),
        );

        let updated = match self.repository.update(&merged).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(key) = &new_image {
                    self.discard_image(key, "failed update").await;
                }
                // Deleted concurrently between the lookup and the write.
                if let RepositoryError::NotFound = err {
                    return Err(ProductError::NotFound);
                }
                return Err(err.into());
            }
        };

        // The record now points at the new key, so the old object can go.
        if new_image.is_some() {
            self.discard_image(&previous_image, "replaced").await;
        }

        self.publisher.publish_changed(&updated).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
