//! Mocks and fixtures shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::access::{Caller, Role};
use crate::domain::broker::{BrokerError, MessageProducerBroker};
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::draft::{ProductDraft, RawProductInput};
use crate::domain::product::model::Product;
use crate::domain::product::query::{Page, ProductSearch};
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::TenantId;
use crate::domain::storage::{FileStorage, ImageFile, StorageError};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn search(&self, search: &ProductSearch) -> Result<Page<Product>, RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn create(&self, category: &Category) -> Result<Category, RepositoryError>;
        async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl FileStorage for Storage {
        async fn upload(&self, key: &str, file: ImageFile) -> Result<(), StorageError>;
        async fn delete(&self, key: &str) -> Result<(), StorageError>;
        fn object_uri(&self, key: &str) -> String;
    }
}

mock! {
    pub Broker {}

    #[async_trait]
    impl MessageProducerBroker for Broker {
        async fn connect(&self) -> Result<(), BrokerError>;
        async fn disconnect(&self) -> Result<(), BrokerError>;
        async fn send_message(&self, topic: &str, message: &str) -> Result<(), BrokerError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub const PRICE_JSON: &str =
    r#"{"size": {"priceType": "base", "availableOptions": {"small": 400, "large": 650}}}"#;

pub fn draft_for(tenant: &str) -> ProductDraft {
    ProductDraft::parse(RawProductInput {
        name: Some("Margherita".to_string()),
        description: Some("Tomato, mozzarella, basil".to_string()),
        price_configuration: Some(PRICE_JSON.to_string()),
        attributes: Some(r#"[{"name": "isHit", "value": "yes"}]"#.to_string()),
        tenant_id: Some(tenant.to_string()),
        category_id: Some(Uuid::new_v4().to_string()),
        is_publish: Some("true".to_string()),
    })
    .unwrap()
}

pub fn stored_product(tenant: &str, image: &str) -> Product {
    Product::new(draft_for(tenant), image.to_string())
}

pub fn image() -> ImageFile {
    ImageFile {
        data: vec![0xFF, 0xD8, 0xFF],
        content_type: Some("image/jpeg".to_string()),
    }
}

pub fn admin() -> Caller {
    Caller::new("admin-1", Role::Admin, None)
}

pub fn manager_of(tenant: &str) -> Caller {
    Caller::new("manager-1", Role::Manager, Some(TenantId::new(tenant)))
}
