use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::can_manage_categories;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        if !can_manage_categories(&params.caller).is_allowed() {
            self.logger.warn(&format!(
                "User {} may not create categories",
                params.caller.user_id
            ));
            return Err(CategoryError::Forbidden);
        }

        let category = Category::new(params.name)?;
        self.logger
            .info(&format!("Creating category: {}", category.name));

        let created = self.repository.create(&category).await?;

        self.logger
            .info(&format!("Category created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_utils::{MockCategoryRepo, admin, manager_of, mock_logger};

    #[tokio::test]
    async fn should_create_category_for_admin() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_create()
            .withf(|category| category.name == "Pizza")
            .times(1)
            .returning(|category| Ok(category.clone()));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let created = use_case
            .execute(CreateCategoryParams {
                caller: admin(),
                name: " Pizza ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Pizza");
    }

    #[tokio::test]
    async fn should_forbid_non_admin() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_create().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                caller: manager_of("5"),
                name: "Pizza".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::Forbidden)));
    }

    #[tokio::test]
    async fn should_reject_blank_name_before_persisting() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_create().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                caller: admin(),
                name: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::NameRequired)));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                caller: admin(),
                name: "Pizza".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::Repository(_))));
    }
}
