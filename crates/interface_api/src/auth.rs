//! Authentication and authorization

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::UserId;
use domain_claims::User;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name
    pub username: String,
    pub email: String,
    /// User's roles
    pub roles: Vec<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl Claims {
    /// Rebuilds the signed-in user carried by the token
    pub fn user(&self) -> Result<User, TokenError> {
        let id: UserId = self.sub.parse().map_err(|_| TokenError::InvalidToken)?;
        Ok(User::new(id, self.username.clone(), self.email.clone()))
    }
}

/// Token errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing permission: {0}")]
    MissingPermission(String),
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `user` - Signed-in user
/// * `roles` - User's roles
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    user: &User,
    roles: Vec<String>,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        roles,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        _ => TokenError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Checks if user has required role
pub fn has_role(claims: &Claims, required_role: &str) -> bool {
    claims.roles.iter().any(|r| r == required_role || r == "admin")
}

/// Fails with [`TokenError::MissingPermission`] unless the token carries `required_role`
pub fn require_role(claims: &Claims, required_role: &str) -> Result<(), TokenError> {
    if has_role(claims, required_role) {
        Ok(())
    } else {
        Err(TokenError::MissingPermission(required_role.to_string()))
    }
}

/// Roles granted at sign-in
///
/// The demo account can also review claims; self-registered users can only
/// file and read their own.
pub fn roles_for(user: &User) -> Vec<String> {
    let mut roles = vec![
        permissions::CLAIM_READ.to_string(),
        permissions::CLAIM_WRITE.to_string(),
    ];
    if *user == User::demo() {
        roles.push(permissions::CLAIM_REVIEW.to_string());
    }
    roles
}

/// Permission definitions
pub mod permissions {
    pub const CLAIM_READ: &str = "claim:read";
    pub const CLAIM_WRITE: &str = "claim:write";
    pub const CLAIM_REVIEW: &str = "claim:review";
}
