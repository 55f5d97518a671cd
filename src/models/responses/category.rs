use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Category;

/// Category data returned in API responses.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct CategoryResponse {
    /// Category's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Category name
    #[schema(example = "Boots")]
    pub name: String,
    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: category.name,
            created_at: DateTime::from_timestamp_millis(category.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
