use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::draft::ProductDraft;
use business::domain::product::errors::ProductError;
use business::domain::product::query::{Pagination, ProductFilter, ProductSearch};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductIdResponse, ProductPageResponse, ProductResponse};
use crate::api::product::form::{ProductForm, read_image};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            list_use_case,
            get_by_id_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    ErrorResponse::validation("product.invalid_id")
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// Multipart form with an image. Publishes a `product` change event.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, auth: JwtBearer, form: ProductForm) -> CreateProductResponse {
        let (raw, upload) = form.into_parts();

        let result = async {
            let draft = ProductDraft::parse(raw)?;
            let image = read_image(upload)
                .await?
                .ok_or(ProductError::ImageRequired)?;
            self.create_use_case
                .execute(CreateProductParams {
                    caller: auth.0,
                    draft,
                    image,
                })
                .await
        }
        .await;

        match result {
            Ok(product) => {
                CreateProductResponse::Created(Json(ProductIdResponse { id: product.id }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    403 => CreateProductResponse::Forbidden(json),
                    502 => CreateProductResponse::BadGateway(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Same form as create; the image part is optional and replaces the
    /// current image when present.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        form: ProductForm,
    ) -> UpdateProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(invalid_id());
        };
        let (raw, upload) = form.into_parts();

        let result = async {
            let draft = ProductDraft::parse(raw)?;
            let image = read_image(upload).await?;
            self.update_use_case
                .execute(UpdateProductParams {
                    id,
                    caller: auth.0,
                    draft,
                    image,
                })
                .await
        }
        .await;

        match result {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductIdResponse { id: product.id })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    502 => UpdateProductResponse::BadGateway(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Case-insensitive name search with optional filters, newest first.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        /// Substring matched against the product name
        q: Query<Option<String>>,
        #[oai(name = "tenantId")] tenant_id: Query<Option<String>>,
        /// Ignored unless it is a valid identifier
        #[oai(name = "categoryId")]
        category_id: Query<Option<String>>,
        /// Only `true` restricts to published products
        #[oai(name = "isPublish")]
        is_publish: Query<Option<String>>,
        /// Page number (default: 1)
        page: Query<Option<String>>,
        /// Page size (default: 10, max: 100)
        limit: Query<Option<String>>,
    ) -> ListProductsResponse {
        let search = ProductSearch::new(
            q.0,
            ProductFilter::from_query(tenant_id.0, category_id.0, is_publish.0),
            Pagination::from_query(page.0, limit.0),
        );

        match self.list_use_case.execute(search).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
