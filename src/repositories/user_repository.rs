//! User repository for all MongoDB operations related to users.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::User;
use crate::pagination::PageSource;

/// Repository for user-related database operations.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create database indexes for the users collection:
    /// unique indexes on `email` and `username`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new user into the database.
    pub async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(user).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError("Inserted id was not an ObjectId".to_string()))
    }

    /// Find a user by their ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a user by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    /// Mark a user as confirmed.
    pub async fn confirm(&self, id: ObjectId) -> Result<(), ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "confirmed": true,
                        "confirmed_on": mongodb::bson::DateTime::now(),
                        "updated_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?;
        Ok(())
    }

    /// Update a user's avatar URL.
    pub async fn update_avatar(&self, id: ObjectId, avatar_url: &str) -> Result<(), ApiError> {
        debug!("Repository: Updating avatar for user: {}", id);
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "avatar_url": avatar_url,
                        "updated_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PageSource for UserRepository {
    type Item = User;

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn slice(&self, offset: u64, limit: u64) -> Result<Vec<User>, ApiError> {
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
