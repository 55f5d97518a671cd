//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::{ERR_FILE_TOO_LARGE, ERR_INVALID_FILE_TYPE, ERR_WEAK_PASSWORD};
use crate::errors::ApiError;

/// Allowed image content types for uploads.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum file size for uploads (5MB).
pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts error messages from ValidationErrors into a flat list
/// suitable for API responses.
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Validate password strength for registration.
///
/// Requires at least one uppercase letter, one lowercase letter, one
/// digit, and one non-alphanumeric character. Length is checked by the
/// request schema, not here.
pub fn validate_password_strength(password: &str) -> Result<(), ApiError> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    if has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(ApiError::BadRequest(ERR_WEAK_PASSWORD.to_string()))
    }
}

/// Validate an upload's content type.
///
/// Returns an error if the content type is not an allowed image type.
pub fn validate_image_content_type(content_type: Option<&str>) -> Result<(), ApiError> {
    match content_type {
        Some(ct) if ALLOWED_IMAGE_TYPES.iter().any(|t| ct.starts_with(t)) => Ok(()),
        _ => Err(ApiError::BadRequest(ERR_INVALID_FILE_TYPE.to_string())),
    }
}

/// Get the file extension for the given content type.
pub fn get_extension_from_content_type(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some("image/jpeg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "jpg",
    }
}

/// Validate an upload's accumulated size.
pub fn validate_upload_size(size: usize) -> Result<(), ApiError> {
    if size > MAX_UPLOAD_SIZE {
        return Err(ApiError::BadRequest(ERR_FILE_TOO_LARGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_accepts_mixed_password() {
        assert!(validate_password_strength("Secure#Password123").is_ok());
        assert!(validate_password_strength("aB3!aB3!").is_ok());
    }

    #[test]
    fn test_password_strength_rejects_missing_classes() {
        // no uppercase
        assert!(validate_password_strength("secure#password123").is_err());
        // no lowercase
        assert!(validate_password_strength("SECURE#PASSWORD123").is_err());
        // no digit
        assert!(validate_password_strength("Secure#Password").is_err());
        // no special character
        assert!(validate_password_strength("SecurePassword123").is_err());
    }

    #[test]
    fn test_image_content_type_allowed() {
        assert!(validate_image_content_type(Some("image/jpeg")).is_ok());
        assert!(validate_image_content_type(Some("image/png")).is_ok());
        assert!(validate_image_content_type(Some("image/webp")).is_ok());
    }

    #[test]
    fn test_image_content_type_rejected() {
        assert!(validate_image_content_type(Some("application/pdf")).is_err());
        assert!(validate_image_content_type(Some("text/html")).is_err());
        assert!(validate_image_content_type(None).is_err());
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(get_extension_from_content_type(Some("image/png")), "png");
        assert_eq!(get_extension_from_content_type(Some("image/gif")), "gif");
        assert_eq!(get_extension_from_content_type(None), "jpg");
    }

    #[test]
    fn test_upload_size_limit() {
        assert!(validate_upload_size(MAX_UPLOAD_SIZE).is_ok());
        assert!(validate_upload_size(MAX_UPLOAD_SIZE + 1).is_err());
    }
}
