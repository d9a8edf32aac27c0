use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::product::publisher::ProductEventPublisher;
use crate::domain::access::{can_manage_products, can_write_product};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::storage::FileStorage;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn FileStorage>,
    pub publisher: Arc<ProductEventPublisher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let CreateProductParams {
            caller,
            draft,
            image,
        } = params;

        if !can_manage_products(&caller).is_allowed()
            || !can_write_product(&caller, &draft.tenant_id).is_allowed()
        {
            self.logger.warn(&format!(
                "User {} may not create products for tenant {}",
                caller.user_id, draft.tenant_id
            ));
            return Err(ProductError::Forbidden);
        }

        self.logger.info(&format!("Creating product: {}", draft.name));

        let image_key = Uuid::new_v4().to_string();
        self.storage.upload(&image_key, image).await?;

        let product = Product::new(draft, image_key);
        let created = match self.repository.create(&product).await {
            Ok(created) => created,
            Err(err) => {
                if let Err(cleanup) = self.storage.delete(&product.image).await {
                    self.logger.warn(&format!(
                        "Orphaned image {} after failed insert: {}",
                        product.image, cleanup
                    ));
                }
                return Err(err.into());
            }
        };

        self.publisher.publish_changed(&created).await?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}
