use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for user login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "Secure#Password123")]
    pub password: String,
}
