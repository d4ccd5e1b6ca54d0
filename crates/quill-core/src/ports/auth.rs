use thiserror::Error;

use crate::domain::Permission;

/// Errors produced by the authentication services.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Session has expired")]
    SessionExpired,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("No session credentials were provided")]
    MissingSession,

    #[error("Password hashing failed: {0}")]
    HashingError(String),
}

/// What a verified session tells us about the caller.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: i64,
    pub username: String,
    pub permissions: Vec<Permission>,
    /// Expiration timestamp (seconds since the Unix epoch).
    pub exp: i64,
}

/// Issues and verifies session tokens.
pub trait SessionService: Send + Sync {
    /// Issue a signed token for an authenticated user.
    fn issue(
        &self,
        user_id: i64,
        username: &str,
        permissions: &[Permission],
    ) -> Result<String, AuthError>;

    /// Verify a token and extract its claims.
    fn verify(&self, token: &str) -> Result<SessionClaims, AuthError>;

    /// How long issued tokens remain valid, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Hashes and verifies passwords.
pub trait PasswordService: Send + Sync {
    /// Hash a plaintext password for storage.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
