//! Authentication service for login, token generation, and password utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::{debug, warn};
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::{ERR_ACCOUNT_NOT_CONFIRMED, ERR_INVALID_CREDENTIALS};
use crate::errors::ApiError;
use crate::models::{Claims, LoginRequest, User};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_email;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<UserRepository>,
}

impl AuthService {
    /// Create a new AuthService sharing the given user repository.
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// Authenticate a user and return a JWT token.
    ///
    /// Only confirmed accounts may log in; an unconfirmed account is
    /// rejected the same way as bad credentials, with a hint to confirm.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), ApiError> {
        let user = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed for {}: unknown email", mask_email(&req.email));
                ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string())
            })?;

        if !verify_password(&req.password, &user.password_hash)? {
            warn!("Login failed for {}: wrong password", mask_email(&req.email));
            return Err(ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()));
        }

        if !user.confirmed {
            warn!(
                "Login refused for {}: account not confirmed",
                mask_email(&req.email)
            );
            return Err(ApiError::Unauthorized(
                ERR_ACCOUNT_NOT_CONFIRMED.to_string(),
            ));
        }

        let token = generate_token(&user)?;

        Ok((user, token))
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a JWT access token for a user.
pub fn generate_token(user: &User) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiration_hours as usize * 3600);

    let user_id = user
        .id
        .ok_or_else(|| ApiError::InternalServerError("User is missing an id".to_string()))?;

    let claims = Claims {
        sub: user_id.to_hex(),
        email: user.email.clone(),
        exp,
        iat: now,
    };

    debug!("Generated token for user {}", mask_email(&user.email));

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}
