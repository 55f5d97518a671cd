use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for user registration.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique username (3-50 characters)
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Password (minimum 8 characters; must mix upper, lower, digit, special)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "Secure#Password123")]
    pub password: String,
}
