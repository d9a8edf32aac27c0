use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::query::{Page, ProductSearch};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::db::database_error;
use super::search::{PRODUCT_COLUMNS, count_query, page_query};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_document<T: serde::Serialize>(value: &T) -> Result<Json<serde_json::Value>, RepositoryError> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|_| RepositoryError::CorruptedDocument)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let sql = format!(
            r#"INSERT INTO products ({columns})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {columns}"#,
            columns = PRODUCT_COLUMNS
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(to_document(&product.price_configuration)?)
            .bind(to_document(&product.attributes)?)
            .bind(product.tenant_id.as_str())
            .bind(product.category_id)
            .bind(product.is_publish)
            .bind(&product.image)
            .bind(product.created_at)
            .bind(product.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("product.insert"))?;

        entity.into_domain()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);

        sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("product.find_by_id"))?
            .map(|e| e.into_domain())
            .transpose()
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let sql = format!(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price_configuration = $4,
                attributes = $5,
                tenant_id = $6,
                category_id = $7,
                is_publish = $8,
                image = $9,
                updated_at = $10
            WHERE id = $1
            RETURNING {}"#,
            PRODUCT_COLUMNS
        );

        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(to_document(&product.price_configuration)?)
            .bind(to_document(&product.attributes)?)
            .bind(product.tenant_id.as_str())
            .bind(product.category_id)
            .bind(product.is_publish)
            .bind(&product.image)
            .bind(product.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("product.update"))?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn search(&self, search: &ProductSearch) -> Result<Page<Product>, RepositoryError> {
        let total: i64 = count_query(search)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("product.count"))?;

        if total == 0 {
            return Ok(Page::empty(search.pagination));
        }

        let entities = page_query(search)
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("product.search"))?;

        let data = entities
            .into_iter()
            .map(|e| e.into_domain())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            data,
            total: u64::try_from(total).unwrap_or_default(),
            page_size: search.pagination.limit,
            current_page: search.pagination.page,
        })
    }
}
