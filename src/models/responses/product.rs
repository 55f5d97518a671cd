use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Product, ProductCategory};

/// Category reference returned inside a product response.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ProductCategoryResponse {
    /// Category's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Category name
    #[schema(example = "Boots")]
    pub name: String,
}

impl From<ProductCategory> for ProductCategoryResponse {
    fn from(category: ProductCategory) -> Self {
        Self {
            id: category.id.to_hex(),
            name: category.name,
        }
    }
}

/// Product data returned in API responses.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ProductResponse {
    /// Product's unique identifier
    #[schema(example = "507f1f77bcf86cd799439012")]
    pub id: String,
    /// Product name
    #[schema(example = "Hiking boot")]
    pub name: String,
    /// Unit price
    #[schema(example = 79.99)]
    pub price: f64,
    /// Size label
    #[schema(example = "42")]
    pub size: String,
    /// Units in stock
    #[schema(example = 10)]
    pub quantity: i32,
    /// Times the product label was printed
    pub printed_times: i32,
    /// Whether the product label was printed at least once
    pub printed_once: bool,
    /// Category the product belongs to
    pub category: ProductCategoryResponse,
    /// When the product was created
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            price: product.price,
            size: product.size,
            quantity: product.quantity,
            printed_times: product.printed_times,
            printed_once: product.printed_once,
            category: product.category.into(),
            created_at: DateTime::from_timestamp_millis(product.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
