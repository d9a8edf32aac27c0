use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use storage::LocalFileStorage;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::publisher::ProductEventPublisher;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::broker::MessageProducerBroker;

use crate::api::security::JwtVerifier;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub jwt_verifier: Arc<JwtVerifier>,
}

impl DependencyContainer {
    pub fn new(
        pool: sqlx::PgPool,
        broker: Arc<dyn MessageProducerBroker>,
        config: &AppConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger::new("use_case"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool));
        let storage = Arc::new(LocalFileStorage::new(
            config.storage.root.clone(),
            config.storage.public_url.clone(),
        ));
        let publisher = Arc::new(ProductEventPublisher {
            broker,
            logger: Arc::new(TracingLogger::new("event_publisher")),
            retry: config.broker.retry,
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            storage: storage.clone(),
            publisher: publisher.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            storage: storage.clone(),
            publisher,
            logger: logger.clone(),
        });
        let list_products_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository,
            storage,
            logger: logger.clone(),
        });

        // Category use cases
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_category_use_case = Arc::new(GetCategoryByIdUseCaseImpl {
            repository: category_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            update_product_use_case,
            list_products_use_case,
            get_product_use_case,
        );

        let category_api = crate::api::category::routes::CategoryApi::new(
            create_category_use_case,
            get_all_categories_use_case,
            get_category_use_case,
        );

        Self {
            health_api,
            product_api,
            category_api,
            jwt_verifier: Arc::new(JwtVerifier::new(&config.auth)),
        }
    }
}
