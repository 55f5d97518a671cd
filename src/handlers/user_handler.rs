//! User handlers for registration, confirmation, and listing.

use actix_web::{web, HttpResponse};
use log::warn;
use validator::Validate;

use crate::constants::{
    ERR_USER_NOT_FOUND, MSG_ACCOUNT_CONFIRMED, MSG_ALREADY_CONFIRMED, MSG_USER_FOUND,
    MSG_USER_REGISTERED,
};
use crate::errors::ApiError;
use crate::models::{ApiResponse, RegisterRequest, UserResponse};
use crate::pagination::{PageQuery, PageRequest};
use crate::services::user_service::ConfirmOutcome;
use crate::services::{token_service, UserService};
use crate::validators::validation_errors_to_api_error;

/// Register a new user account
///
/// A confirmation link is issued for the new account; the account cannot
/// log in until it has been confirmed.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "Email or username already exists", body = crate::models::ErrorResponse)
    )
)]
pub async fn register(
    user_service: web::Data<UserService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = user_service.register(body.into_inner()).await?;
    let response: UserResponse = user.into();

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_USER_REGISTERED, response)))
}

/// Confirm a user account via its confirmation token
#[utoipa::path(
    get,
    path = "/api/users/confirm/{token}",
    tag = "Users",
    params(
        ("token" = String, Path, description = "Confirmation token from the registration email")
    ),
    responses(
        (status = 201, description = "Account confirmed"),
        (status = 200, description = "Account was already confirmed"),
        (status = 400, description = "Invalid or expired confirmation token", body = crate::models::ErrorResponse),
        (status = 404, description = "Account not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn confirm_account(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let token = path.into_inner();

    let email = token_service::confirm_token(&token)?;

    match user_service.confirm_account(&email).await? {
        ConfirmOutcome::Confirmed => {
            Ok(HttpResponse::Created().json(ApiResponse::<()>::message(MSG_ACCOUNT_CONFIRMED)))
        }
        ConfirmOutcome::AlreadyConfirmed => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_ALREADY_CONFIRMED)))
        }
    }
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 25, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of users", body = crate::pagination::Page<UserResponse>),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Page out of range", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_users(
    user_service: web::Data<UserService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = PageRequest::from_query(&query)?;
    let page = user_service.list(&request).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let user = user_service
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| {
            warn!("User not found with id: {}", user_id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })?;

    let response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_FOUND, response)))
}
