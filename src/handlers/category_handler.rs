//! Category handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::constants::{MSG_CATEGORY_CREATED, MSG_CATEGORY_FOUND, MSG_CATEGORY_UPDATED};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::pagination::{PageQuery, PageRequest};
use crate::services::CategoryService;
use crate::validators::validation_errors_to_api_error;

/// List categories with pagination
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 25, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of categories", body = crate::pagination::Page<CategoryResponse>),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Page out of range", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_categories(
    category_service: web::Data<CategoryService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = PageRequest::from_query(&query)?;
    let page = category_service.list(&request).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 409, description = "Category name already exists", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    category_service: web::Data<CategoryService>,
    body: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let category = category_service.create(&body.name).await?;
    let response: CategoryResponse = category.into();

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_CATEGORY_CREATED, response)))
}

/// Get a specific category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();

    let category = category_service.get_by_id(&category_id).await?;
    let response: CategoryResponse = category.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_CATEGORY_FOUND, response)))
}

/// Rename a category
#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Category name already exists", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
    body: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();

    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let category = category_service
        .update(&category_id, body.into_inner())
        .await?;
    let response: CategoryResponse = category.into();

    info!("Successfully updated category: {}", category_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_CATEGORY_UPDATED, response)))
}

/// Delete a category
///
/// Refused while products still reference the category.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Category still in use", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();

    category_service.delete(&category_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
