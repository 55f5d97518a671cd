//! Category repository for all MongoDB operations related to categories.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_CATEGORIES;
use crate::errors::ApiError;
use crate::models::Category;
use crate::pagination::PageSource;

/// Repository for category-related database operations.
pub struct CategoryRepository {
    collection: Collection<Category>,
}

impl CategoryRepository {
    /// Create a new CategoryRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_CATEGORIES),
        }
    }

    /// Create database indexes for the categories collection.
    ///
    /// Called once during application startup. Creates a unique index on
    /// `name`, backing the uniqueness checks in the service layer.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for categories collection...");

        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert a new category into the database.
    pub async fn insert(&self, category: &Category) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(category).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError("Inserted id was not an ObjectId".to_string()))
    }

    /// Find a category by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Category>, ApiError> {
        debug!("Repository: Finding category by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a category by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, ApiError> {
        debug!("Repository: Finding category by name: {}", name);
        Ok(self.collection.find_one(doc! { "name": name }).await?)
    }

    /// Update a category document.
    pub async fn update(&self, id: ObjectId, update: Document) -> Result<(), ApiError> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?;
        Ok(())
    }

    /// Delete a category by ObjectId. Returns the number of deleted documents.
    pub async fn delete(&self, id: ObjectId) -> Result<u64, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl PageSource for CategoryRepository {
    type Item = Category;

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn slice(&self, offset: u64, limit: u64) -> Result<Vec<Category>, ApiError> {
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
