use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Permission;

/// User entity - an account that can hold post permissions.
///
/// Self-registration grants no permissions; those are provisioned directly
/// in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub permissions: Vec<Permission>,
    pub created_date: DateTime<Utc>,
}

impl User {
    /// Create a new user without permissions. The id is assigned on first
    /// save; the password must already be hashed.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: 0,
            username,
            password_hash,
            permissions: Vec::new(),
            created_date: Utc::now(),
        }
    }
}
