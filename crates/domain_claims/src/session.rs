//! Mock authentication
//!
//! There is no account database: the demo account is the only one that can
//! log in, and registration hands back a fresh user without remembering it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use core_kernel::UserId;

/// Email of the built-in demo account
pub const DEMO_EMAIL: &str = "demo@example.com";
/// Password of the built-in demo account
pub const DEMO_PASSWORD: &str = "password";
/// Display name of the built-in demo account
pub const DEMO_USERNAME: &str = "Demo User";

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// The built-in demo account, with a stable identifier
    pub fn demo() -> Self {
        Self::new(UserId::from_uuid(Uuid::from_u128(1)), DEMO_USERNAME, DEMO_EMAIL)
    }
}

/// Who, if anyone, is making a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Forgets the signed-in user, returning who was signed in
    pub fn sign_out(&mut self) -> Option<User> {
        self.user.take()
    }
}

/// Authentication errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,
}

/// Login and registration
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Accepts only the demo account; registration always succeeds for well-formed input
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

impl DemoAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        Err(AuthError::MissingField(field))
    } else {
        Ok(())
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        require(email, "email")?;
        require(password, "password")?;

        if email.trim().eq_ignore_ascii_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
            Ok(User::demo())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, AuthError> {
        require(username, "username")?;
        require(email, "email")?;
        require(password, "password")?;

        let email = email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(AuthError::InvalidEmail),
        }

        Ok(User::new(UserId::new(), username.trim(), email))
    }
}
