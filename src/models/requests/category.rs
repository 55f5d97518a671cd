use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a category.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name (1-100 characters, unique)
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Boots")]
    pub name: String,
}

/// Request payload for renaming a category.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    /// New category name (1-100 characters, unique)
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Winter boots")]
    pub name: Option<String>,
}
