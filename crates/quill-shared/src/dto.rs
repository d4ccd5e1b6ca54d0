//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// A post as returned by the API. Dates are RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub text: String,
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// A comment as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub text: String,
    pub created_date: String,
    pub approved_comment: bool,
}

/// Response for the post listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
}

/// Response for the post detail endpoint: the post plus its visible comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

/// One input of a form description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FormField {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Describes the form a GET form endpoint expects to be posted back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    pub form: String,
    pub fields: Vec<FormField>,
}

impl FormResponse {
    pub fn new(form: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            form: form.into(),
            fields,
        }
    }
}

/// Response containing a session token after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
