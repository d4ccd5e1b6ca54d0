use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog entry with a draft/published lifecycle.
///
/// A post with no `published_date` is a draft: it only shows up in the
/// drafts listing, never in the public list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub text: String,
    pub created_date: DateTime<Utc>,
    pub published_date: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new draft. The id is assigned by the store on first save.
    pub fn new(author_id: i64, title: String, text: String) -> Self {
        Self {
            id: 0,
            author_id,
            title,
            text,
            created_date: Utc::now(),
            published_date: None,
        }
    }

    /// Mark the post as published. One-way: there is no unpublish.
    pub fn publish(&mut self) {
        self.published_date = Some(Utc::now());
    }

    pub fn is_draft(&self) -> bool {
        self.published_date.is_none()
    }
}
