use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Category reference embedded in a product document.
///
/// The name is denormalized so listing products stays a single query;
/// category renames rewrite it via `update_many`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductCategory {
    pub id: ObjectId,
    pub name: String,
}

/// Product document stored in MongoDB.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    pub size: String,
    pub quantity: i32,
    pub printed_times: i32,
    pub printed_once: bool,
    pub category: ProductCategory,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}
