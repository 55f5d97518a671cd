//! User service for registration, confirmation, and listing.

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::{
    ERR_EMAIL_EXISTS, ERR_FAILED_FETCH_UPDATED, ERR_INVALID_USER_ID, ERR_USERNAME_EXISTS,
    ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{RegisterRequest, User, UserResponse};
use crate::pagination::{paginate, Page, PageRequest};
use crate::repositories::UserRepository;
use crate::services::auth_service::hash_password;
use crate::services::token_service::generate_confirmation_token;
use crate::utils::log_sanitizer::{mask_email, mask_username};
use crate::validators::validate_password_strength;

/// Outcome of an account confirmation attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The account was confirmed by this request.
    Confirmed,
    /// The account had already been confirmed earlier.
    AlreadyConfirmed,
}

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Get the underlying repository (for sharing with other services).
    pub fn repository(&self) -> Arc<UserRepository> {
        Arc::clone(&self.repository)
    }

    /// Register a new user and issue a confirmation token.
    ///
    /// Email delivery is delegated; the confirmation URL is logged so the
    /// flow can be completed in environments without a mail relay.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, ApiError> {
        if self
            .repository
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }

        if self.repository.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        validate_password_strength(&req.password)?;
        let password_hash = hash_password(&req.password)?;

        let now = mongodb::bson::DateTime::now();
        let user = User {
            id: None,
            username: req.username,
            email: req.email.to_lowercase(),
            password_hash,
            confirmed: false,
            confirmed_on: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&user).await?;

        let token = generate_confirmation_token(&user.email)?;
        info!(
            "Registered user {} ({}); confirmation link: {}/api/users/confirm/{}",
            mask_username(&user.username),
            mask_email(&user.email),
            CONFIG.public_base_url,
            token
        );

        Ok(User {
            id: Some(id),
            ..user
        })
    }

    /// List users as one page of serialized responses.
    pub async fn list(&self, request: &PageRequest) -> Result<Page<UserResponse>, ApiError> {
        paginate(&*self.repository, request, "/api/users", UserResponse::from).await
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", id);
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        self.repository.find_by_id(object_id).await
    }

    /// Confirm the account belonging to a verified token's email.
    pub async fn confirm_account(&self, email: &str) -> Result<ConfirmOutcome, ApiError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Confirmation for unknown account {}", mask_email(email));
                ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
            })?;

        if user.confirmed {
            debug!("Account {} already confirmed", mask_email(email));
            return Ok(ConfirmOutcome::AlreadyConfirmed);
        }

        let user_id = user
            .id
            .ok_or_else(|| ApiError::InternalServerError("User is missing an id".to_string()))?;
        self.repository.confirm(user_id).await?;

        info!("Account {} confirmed", mask_email(email));
        Ok(ConfirmOutcome::Confirmed)
    }

    /// Store a new avatar URL for a user and return the updated user.
    pub async fn set_avatar(&self, user_id: &str, avatar_url: &str) -> Result<User, ApiError> {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| {
                warn!("Avatar update failed: user not found with id: {}", user_id);
                ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
            })?;

        self.repository.update_avatar(object_id, avatar_url).await?;

        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_UPDATED.to_string()))
    }
}
