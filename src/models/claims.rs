//! JWT claim structures for access and confirmation tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Claims carried by an account confirmation token.
///
/// The `purpose` field keeps confirmation tokens from being accepted as
/// access tokens and vice versa.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfirmClaims {
    pub sub: String, // email being confirmed
    pub purpose: String,
    pub exp: usize,
    pub iat: usize,
}

/// Expected value of [`ConfirmClaims::purpose`].
pub const CONFIRM_PURPOSE: &str = "confirm";
