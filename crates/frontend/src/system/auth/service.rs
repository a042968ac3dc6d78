//! Authentication service boundary.

use async_trait::async_trait;
use contracts::system::auth::UserRole;
use thiserror::Error;

/// Identifier, password and role captured by the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
    pub role: UserRole,
}

/// Why a login call could not produce a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Result of a single login attempt.
///
/// Rejected credentials and transport failures are distinct variants so a
/// caller cannot mistake one for the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    InvalidCredentials,
    Failed(AuthError),
}

/// Verifies credentials for a role.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome;
}
