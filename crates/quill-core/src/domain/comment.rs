use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - attached to one post, submitted by anyone, and held
/// back until a moderator approves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    /// Free-text display name; commenting needs no account.
    pub author: String,
    pub text: String,
    pub created_date: DateTime<Utc>,
    pub approved_comment: bool,
}

impl Comment {
    /// Create a new unapproved comment. The id is assigned on first save.
    pub fn new(post_id: i64, author: String, text: String) -> Self {
        Self {
            id: 0,
            post_id,
            author,
            text,
            created_date: Utc::now(),
            approved_comment: false,
        }
    }

    /// Approve the comment. Idempotent.
    pub fn approve(&mut self) {
        self.approved_comment = true;
    }
}
