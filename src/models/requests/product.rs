use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Category reference in a product creation request. The category is
/// looked up by name and created when it does not exist yet.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRef {
    /// Category name
    #[validate(length(min = 1, max = 100, message = "Category name must be between 1 and 100 characters"))]
    #[schema(example = "Boots")]
    pub name: String,
}

/// Request payload for creating a product.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Product name (1-150 characters, unique)
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    #[schema(example = "Hiking boot")]
    pub name: String,
    /// Unit price
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(example = 79.99)]
    pub price: f64,
    /// Size label
    #[validate(length(min = 1, max = 20, message = "Size must be between 1 and 20 characters"))]
    #[schema(example = "42")]
    pub size: String,
    /// Units in stock
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(example = 10)]
    pub quantity: i32,
    /// Category the product belongs to
    #[validate(nested)]
    pub category: CategoryRef,
}

/// Request payload for partially updating a product.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    /// New product name (1-150 characters, unique)
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: Option<String>,
    /// New unit price
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    /// New size label
    #[validate(length(min = 1, max = 20, message = "Size must be between 1 and 20 characters"))]
    pub size: Option<String>,
    /// New stock quantity
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i32>,
    /// Times the product label was printed
    #[validate(range(min = 0, message = "Printed times must not be negative"))]
    pub printed_times: Option<i32>,
    /// Whether the product label was printed at least once
    pub printed_once: Option<bool>,
}
