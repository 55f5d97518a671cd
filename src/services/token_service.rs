//! Account confirmation tokens.
//!
//! Confirmation links carry a short-lived JWT binding the user's email to
//! the "confirm" purpose, so access tokens and confirmation tokens are
//! never interchangeable.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::CONFIG;
use crate::constants::ERR_CONFIRM_TOKEN_INVALID;
use crate::errors::ApiError;
use crate::models::{ConfirmClaims, CONFIRM_PURPOSE};

/// Generate a confirmation token for the given email address.
pub fn generate_confirmation_token(email: &str) -> Result<String, ApiError> {
    generate_with_secret(email, CONFIG.jwt_secret.as_bytes(), CONFIG.confirm_token_expiration_hours)
}

/// Verify a confirmation token and return the email it was issued for.
pub fn confirm_token(token: &str) -> Result<String, ApiError> {
    confirm_with_secret(token, CONFIG.jwt_secret.as_bytes())
}

fn generate_with_secret(
    email: &str,
    secret: &[u8],
    expiration_hours: i64,
) -> Result<String, ApiError> {
    let now = Utc::now().timestamp();
    let exp = now + expiration_hours * 3600;

    let claims = ConfirmClaims {
        sub: email.to_lowercase(),
        purpose: CONFIRM_PURPOSE.to_string(),
        exp: exp as usize,
        iat: now as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )?)
}

fn confirm_with_secret(token: &str, secret: &[u8]) -> Result<String, ApiError> {
    let token_data = decode::<ConfirmClaims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map_err(|_| ApiError::BadRequest(ERR_CONFIRM_TOKEN_INVALID.to_string()))?;

    if token_data.claims.purpose != CONFIRM_PURPOSE {
        return Err(ApiError::BadRequest(ERR_CONFIRM_TOKEN_INVALID.to_string()));
    }

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Claims;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = generate_with_secret("User@Example.com", SECRET, 48).unwrap();
        let email = confirm_with_secret(&token, SECRET).unwrap();
        assert_eq!(email, "user@example.com");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = generate_with_secret("user@example.com", SECRET, 48).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(confirm_with_secret(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate_with_secret("user@example.com", SECRET, 48).unwrap();
        assert!(confirm_with_secret(&token, b"other-secret").is_err());
    }

    #[test]
    fn test_access_token_not_accepted_as_confirmation() {
        // An access token without the confirm purpose must not confirm anyone.
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            email: "user@example.com".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(confirm_with_secret(&token, SECRET).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = generate_with_secret("user@example.com", SECRET, -2).unwrap();
        assert!(confirm_with_secret(&token, SECRET).is_err());
    }
}
