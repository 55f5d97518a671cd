//! Image and avatar upload handlers.

use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};

use crate::constants::{
    ERR_AVATAR_NOT_FOUND, ERR_IMAGE_NOT_FOUND, MSG_AVATAR_UPLOADED, MSG_IMAGE_UPLOADED,
};
use crate::errors::ApiError;
use crate::middleware::require_auth;
use crate::models::{ApiResponse, UploadResponse, UserResponse};
use crate::services::{FileService, UserService};

/// Upload an image
///
/// Accepts JPEG, PNG, GIF, and WebP images in a multipart field named
/// `image`. Maximum file size is 5MB.
#[utoipa::path(
    post,
    path = "/api/upload/image",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data", description = "Image file in field 'image'"),
    responses(
        (status = 201, description = "Image uploaded", body = UploadResponse),
        (status = 400, description = "Invalid file type or size", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_image(
    file_service: web::Data<FileService>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let url = file_service.save_image("image", &mut payload).await?;

    info!("Stored uploaded image at {}", url);
    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_IMAGE_UPLOADED,
        UploadResponse { url },
    )))
}

/// Serve a stored image by filename
#[utoipa::path(
    get,
    path = "/api/image/{filename}",
    tag = "Uploads",
    params(
        ("filename" = String, Path, description = "Stored image filename")
    ),
    responses(
        (status = 200, description = "The image file"),
        (status = 400, description = "Invalid filename", body = crate::models::ErrorResponse),
        (status = 404, description = "Image not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_image(
    file_service: web::Data<FileService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let filename = path.into_inner();
    let filepath = file_service.resolve(&filename)?;

    let file = NamedFile::open(filepath)
        .map_err(|_| ApiError::NotFound(ERR_IMAGE_NOT_FOUND.to_string()))?;

    Ok(file.into_response(&req))
}

/// Upload the authenticated user's avatar
///
/// Accepts a multipart field named `avatar` and updates the user's
/// avatar URL.
#[utoipa::path(
    post,
    path = "/api/upload/avatar",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data", description = "Avatar image in field 'avatar'"),
    responses(
        (status = 200, description = "Avatar uploaded", body = UserResponse),
        (status = 400, description = "Invalid file type or size", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_avatar(
    file_service: web::Data<FileService>,
    user_service: web::Data<UserService>,
    mut payload: Multipart,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    let url = file_service.save_image("avatar", &mut payload).await?;

    // Replace the previous avatar file, if any
    if let Ok(Some(user)) = user_service.get_user_by_id(&claims.sub).await {
        if let Some(ref old_url) = user.avatar_url {
            if let Err(e) = file_service.delete_url(old_url) {
                warn!("Failed to delete previous avatar {}: {}", old_url, e);
            }
        }
    }

    let updated_user = user_service.set_avatar(&claims.sub, &url).await?;
    let response: UserResponse = updated_user.into();

    info!("Updated avatar for user {}", claims.sub);
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_AVATAR_UPLOADED, response)))
}

/// Serve a user's avatar
#[utoipa::path(
    get,
    path = "/api/avatar/{user_id}",
    tag = "Uploads",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The avatar file"),
        (status = 404, description = "User or avatar not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_avatar(
    file_service: web::Data<FileService>,
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let user = user_service
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_AVATAR_NOT_FOUND.to_string()))?;

    let avatar_url = user
        .avatar_url
        .ok_or_else(|| ApiError::NotFound(ERR_AVATAR_NOT_FOUND.to_string()))?;

    let filepath = file_service.resolve_url(&avatar_url)?;
    let file = NamedFile::open(filepath)
        .map_err(|_| ApiError::NotFound(ERR_AVATAR_NOT_FOUND.to_string()))?;

    Ok(file.into_response(&req))
}
