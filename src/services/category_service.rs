//! Category service for category CRUD operations.

use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId};
use std::sync::Arc;

use crate::constants::{
    ERR_CATEGORY_EXISTS, ERR_CATEGORY_IN_USE, ERR_CATEGORY_NOT_FOUND, ERR_FAILED_FETCH_UPDATED,
    ERR_INVALID_CATEGORY_ID,
};
use crate::errors::ApiError;
use crate::models::{Category, CategoryResponse, UpdateCategoryRequest};
use crate::pagination::{paginate, Page, PageRequest};
use crate::repositories::{CategoryRepository, ProductRepository};

pub struct CategoryService {
    repository: Arc<CategoryRepository>,
    products: Arc<ProductRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<CategoryRepository>, products: Arc<ProductRepository>) -> Self {
        Self {
            repository,
            products,
        }
    }

    /// Get the underlying repository (for sharing with other services).
    pub fn repository(&self) -> Arc<CategoryRepository> {
        Arc::clone(&self.repository)
    }

    /// List categories as one page of serialized responses.
    pub async fn list(&self, request: &PageRequest) -> Result<Page<CategoryResponse>, ApiError> {
        paginate(
            &*self.repository,
            request,
            "/api/categories",
            CategoryResponse::from,
        )
        .await
    }

    /// Create a new category with a unique name.
    pub async fn create(&self, name: &str) -> Result<Category, ApiError> {
        if self.repository.find_by_name(name).await?.is_some() {
            return Err(ApiError::Conflict(ERR_CATEGORY_EXISTS.to_string()));
        }

        let now = mongodb::bson::DateTime::now();
        let category = Category {
            id: None,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&category).await?;
        info!("Created category '{}' ({})", name, id.to_hex());

        Ok(Category {
            id: Some(id),
            ..category
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Category, ApiError> {
        let object_id = parse_category_id(id)?;
        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Category not found with id: {}", id);
                ApiError::NotFound(ERR_CATEGORY_NOT_FOUND.to_string())
            })
    }

    /// Rename a category.
    ///
    /// The new name must be unique; the embedded category name on every
    /// product of this category is rewritten in the same operation.
    pub async fn update(
        &self,
        id: &str,
        req: UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let object_id = parse_category_id(id)?;

        let existing = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Update failed: category not found with id: {}", id);
                ApiError::NotFound(ERR_CATEGORY_NOT_FOUND.to_string())
            })?;

        let Some(new_name) = req.name else {
            debug!("No changes requested for category: {}", id);
            return Ok(existing);
        };

        if new_name == existing.name {
            return Ok(existing);
        }

        if let Some(other) = self.repository.find_by_name(&new_name).await? {
            if other.id != existing.id {
                warn!("Update failed: category name '{}' already taken", new_name);
                return Err(ApiError::Conflict(ERR_CATEGORY_EXISTS.to_string()));
            }
        }

        self.repository
            .update(
                object_id,
                doc! { "name": &new_name, "updated_at": mongodb::bson::DateTime::now() },
            )
            .await?;

        let renamed = self.products.rename_category(object_id, &new_name).await?;
        if renamed > 0 {
            info!(
                "Category rename propagated to {} products ({} -> {})",
                renamed, existing.name, new_name
            );
        }

        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_UPDATED.to_string()))
    }

    /// Delete a category. Refused while products still reference it.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let object_id = parse_category_id(id)?;

        let in_use = self.products.count_by_category(object_id).await?;
        if in_use > 0 {
            warn!(
                "Delete refused: category {} still referenced by {} products",
                id, in_use
            );
            return Err(ApiError::Conflict(ERR_CATEGORY_IN_USE.to_string()));
        }

        let deleted = self.repository.delete(object_id).await?;
        if deleted == 0 {
            warn!("Delete failed: category not found with id: {}", id);
            return Err(ApiError::NotFound(ERR_CATEGORY_NOT_FOUND.to_string()));
        }

        info!("Deleted category {}", id);
        Ok(())
    }
}

fn parse_category_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string()))
}
