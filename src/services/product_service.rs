//! Product service for product CRUD operations.

use log::{debug, info, warn};
use mongodb::bson::{oid::ObjectId, Document};
use std::sync::Arc;

use crate::constants::{
    ERR_FAILED_FETCH_UPDATED, ERR_INVALID_PRODUCT_ID, ERR_PRODUCT_EXISTS, ERR_PRODUCT_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{
    Category, CreateProductRequest, Product, ProductCategory, ProductResponse,
    UpdateProductRequest,
};
use crate::pagination::{paginate, Page, PageRequest};
use crate::repositories::{CategoryRepository, ProductRepository};

pub struct ProductService {
    repository: Arc<ProductRepository>,
    categories: Arc<CategoryRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<ProductRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self {
            repository,
            categories,
        }
    }

    /// Get the underlying repository (for sharing with other services).
    pub fn repository(&self) -> Arc<ProductRepository> {
        Arc::clone(&self.repository)
    }

    /// List products as one page of serialized responses.
    pub async fn list(&self, request: &PageRequest) -> Result<Page<ProductResponse>, ApiError> {
        paginate(
            &*self.repository,
            request,
            "/api/products",
            ProductResponse::from,
        )
        .await
    }

    /// Create a new product with a unique name.
    ///
    /// The referenced category is looked up by name and created on the
    /// fly when it does not exist yet.
    pub async fn create(&self, req: CreateProductRequest) -> Result<Product, ApiError> {
        if self.repository.find_by_name(&req.name).await?.is_some() {
            return Err(ApiError::Conflict(ERR_PRODUCT_EXISTS.to_string()));
        }

        let category = self.get_or_create_category(&req.category.name).await?;
        let category_id = category
            .id
            .ok_or_else(|| ApiError::InternalServerError("Category is missing an id".to_string()))?;

        let now = mongodb::bson::DateTime::now();
        let product = Product {
            id: None,
            name: req.name,
            price: req.price,
            size: req.size,
            quantity: req.quantity,
            printed_times: 0,
            printed_once: false,
            category: ProductCategory {
                id: category_id,
                name: category.name,
            },
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&product).await?;
        info!("Created product '{}' ({})", product.name, id.to_hex());

        Ok(Product {
            id: Some(id),
            ..product
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Product, ApiError> {
        let object_id = parse_product_id(id)?;
        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Product not found with id: {}", id);
                ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string())
            })
    }

    /// Partially update a product. A rename re-checks name uniqueness.
    pub async fn update(&self, id: &str, req: UpdateProductRequest) -> Result<Product, ApiError> {
        let object_id = parse_product_id(id)?;

        let existing = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Update failed: product not found with id: {}", id);
                ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string())
            })?;

        let mut update_doc = Document::new();

        if let Some(ref new_name) = req.name {
            if *new_name != existing.name {
                if let Some(other) = self.repository.find_by_name(new_name).await? {
                    if other.id != existing.id {
                        warn!("Update failed: product name '{}' already taken", new_name);
                        return Err(ApiError::Conflict(ERR_PRODUCT_EXISTS.to_string()));
                    }
                }
                update_doc.insert("name", new_name.clone());
            }
        }

        if let Some(price) = req.price {
            update_doc.insert("price", price);
        }
        if let Some(ref size) = req.size {
            update_doc.insert("size", size.clone());
        }
        if let Some(quantity) = req.quantity {
            update_doc.insert("quantity", quantity);
        }
        if let Some(printed_times) = req.printed_times {
            update_doc.insert("printed_times", printed_times);
        }
        if let Some(printed_once) = req.printed_once {
            update_doc.insert("printed_once", printed_once);
        }

        if update_doc.is_empty() {
            debug!("No changes detected for product: {}", id);
            return Ok(existing);
        }

        update_doc.insert("updated_at", mongodb::bson::DateTime::now());
        self.repository.update(object_id, update_doc).await?;

        info!("Updated product {}", id);

        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_UPDATED.to_string()))
    }

    /// Delete a product by ID.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let object_id = parse_product_id(id)?;

        let deleted = self.repository.delete(object_id).await?;
        if deleted == 0 {
            warn!("Delete failed: product not found with id: {}", id);
            return Err(ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string()));
        }

        info!("Deleted product {}", id);
        Ok(())
    }

    async fn get_or_create_category(&self, name: &str) -> Result<Category, ApiError> {
        if let Some(category) = self.categories.find_by_name(name).await? {
            return Ok(category);
        }

        debug!("Creating category '{}' for new product", name);
        let now = mongodb::bson::DateTime::now();
        let category = Category {
            id: None,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        let id = self.categories.insert(&category).await?;

        Ok(Category {
            id: Some(id),
            ..category
        })
    }
}

fn parse_product_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))
}
