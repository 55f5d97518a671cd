//! Product repository for all MongoDB operations related to products.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_PRODUCTS;
use crate::errors::ApiError;
use crate::models::Product;
use crate::pagination::PageSource;

/// Repository for product-related database operations.
pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    /// Create a new ProductRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_PRODUCTS),
        }
    }

    /// Create database indexes for the products collection:
    /// a unique index on `name` and a lookup index on `category.id`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
            IndexModel::builder().keys(doc! { "category.id": 1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new product into the database.
    pub async fn insert(&self, product: &Product) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(product).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError("Inserted id was not an ObjectId".to_string()))
    }

    /// Find a product by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, ApiError> {
        debug!("Repository: Finding product by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a product by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ApiError> {
        debug!("Repository: Finding product by name: {}", name);
        Ok(self.collection.find_one(doc! { "name": name }).await?)
    }

    /// Count products referencing the given category.
    pub async fn count_by_category(&self, category_id: ObjectId) -> Result<u64, ApiError> {
        Ok(self
            .collection
            .count_documents(doc! { "category.id": category_id })
            .await?)
    }

    /// Rewrite the embedded category name on every product of a category.
    pub async fn rename_category(
        &self,
        category_id: ObjectId,
        new_name: &str,
    ) -> Result<u64, ApiError> {
        let result = self
            .collection
            .update_many(
                doc! { "category.id": category_id },
                doc! { "$set": { "category.name": new_name } },
            )
            .await?;
        Ok(result.modified_count)
    }

    /// Update a product document.
    pub async fn update(&self, id: ObjectId, update: Document) -> Result<(), ApiError> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?;
        Ok(())
    }

    /// Delete a product by ObjectId. Returns the number of deleted documents.
    pub async fn delete(&self, id: ObjectId) -> Result<u64, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl PageSource for ProductRepository {
    type Item = Product;

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn slice(&self, offset: u64, limit: u64) -> Result<Vec<Product>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(offset)
            .limit(limit as i64)
            .await?;

        Ok(cursor.try_collect().await?)
    }
}
