//! Generic response envelopes.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic API response wrapper for single-resource endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ApiMessageResponse)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn message(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Response for successful authentication.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    pub message: String,
    /// JWT token for authentication
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// User information
    pub user: super::UserResponse,
}

/// Response for image uploads.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// URL of the stored file
    #[schema(example = "/uploads/8f1f77bc-f86c-d799-4390-1177bcf86cd7.jpg")]
    pub url: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

/// Error response structure (mirrors `errors::ErrorResponse` for the docs).
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ApiErrorResponse)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Error message
    #[schema(example = "An error occurred")]
    pub message: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
