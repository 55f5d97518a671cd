//! Product handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::constants::{MSG_PRODUCT_CREATED, MSG_PRODUCT_FOUND, MSG_PRODUCT_UPDATED};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::pagination::{PageQuery, PageRequest};
use crate::services::ProductService;
use crate::validators::validation_errors_to_api_error;

/// List products with pagination
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 25, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of products", body = crate::pagination::Page<ProductResponse>),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Page out of range", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_products(
    product_service: web::Data<ProductService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = PageRequest::from_query(&query)?;
    let page = product_service.list(&request).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Create a new product
///
/// The referenced category is created on the fly when it does not exist.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 409, description = "Product name already exists", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    product_service: web::Data<ProductService>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let product = product_service.create(body.into_inner()).await?;
    let response: ProductResponse = product.into();

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_PRODUCT_CREATED, response)))
}

/// Get a specific product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();

    let product = product_service.get_by_id(&product_id).await?;
    let response: ProductResponse = product.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PRODUCT_FOUND, response)))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Product name already exists", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();

    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let product = product_service
        .update(&product_id, body.into_inner())
        .await?;
    let response: ProductResponse = product.into();

    info!("Successfully updated product: {}", product_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PRODUCT_UPDATED, response)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();

    product_service.delete(&product_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
