use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses (without sensitive fields).
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's username
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Whether the account has been confirmed
    #[schema(example = true)]
    pub confirmed: bool,
    /// When the account was confirmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_on: Option<DateTime<Utc>>,
    /// URL to the user's avatar image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
            confirmed: user.confirmed,
            confirmed_on: user.confirmed_on.map(|dt| {
                DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
            }),
            avatar_url: user.avatar_url,
            created_at: DateTime::from_timestamp_millis(user.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_carries_no_password_hash() {
        let user = User {
            id: Some(ObjectId::new()),
            username: "johndoe".to_string(),
            email: "user@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            confirmed: false,
            confirmed_on: None,
            avatar_url: None,
            created_at: mongodb::bson::DateTime::now(),
            updated_at: mongodb::bson::DateTime::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$12$secret"));
        assert!(json.contains("johndoe"));
    }
}
