use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::{Page, ProductSearch};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::ListProductsUseCase;
use crate::domain::storage::FileStorage;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn FileStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, search: ProductSearch) -> Result<Page<Product>, ProductError> {
        self.logger.debug(&format!(
            "Listing products (q: {:?}, page: {}, limit: {})",
            search.q, search.pagination.page, search.pagination.limit
        ));

        let page = self.repository.search(&search).await?;

        self.logger.info(&format!(
            "Found {} of {} products",
            page.data.len(),
            page.total
        ));

        // Storage keys never leave the service; clients get retrievable URIs.
        Ok(page.map(|mut product| {
            product.image = self.storage.object_uri(&product.image);
            product
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::query::{Pagination, ProductFilter};
    use crate::test_utils::{MockProductRepo, MockStorage, mock_logger, stored_product};

    fn public_storage() -> MockStorage {
        let mut storage = MockStorage::new();
        storage
            .expect_object_uri()
            .returning(|key| format!("https://cdn.example.com/{}", key));
        storage
    }

    #[tokio::test]
    async fn should_rewrite_each_image_to_uri() {
        let mut repo = MockProductRepo::new();
        repo.expect_search().returning(|search| {
            Ok(Page {
                data: vec![stored_product("5", "key-a"), stored_product("5", "key-b")],
                total: 2,
                page_size: search.pagination.limit,
                current_page: search.pagination.page,
            })
        });

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(repo),
            storage: Arc::new(public_storage()),
            logger: mock_logger(),
        };

        let page = use_case.execute(ProductSearch::default()).await.unwrap();

        let images: Vec<&str> = page.data.iter().map(|p| p.image.as_str()).collect();
        assert_eq!(
            images,
            vec![
                "https://cdn.example.com/key-a",
                "https://cdn.example.com/key-b"
            ]
        );
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn should_return_empty_page_with_requested_pagination() {
        let mut repo = MockProductRepo::new();
        repo.expect_search()
            .withf(|search| search.filter.is_publish == Some(true))
            .returning(|search| Ok(Page::empty(search.pagination)));
        let mut storage = MockStorage::new();
        storage.expect_object_uri().never();

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(repo),
            storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let search = ProductSearch::new(
            Some("calzone".to_string()),
            ProductFilter::from_query(None, None, Some("true".to_string())),
            Pagination { page: 3, limit: 20 },
        );
        let page = use_case.execute(search).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.page_size, 20);
    }
}
