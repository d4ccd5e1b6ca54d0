//! Form payloads and their validation rules.
//!
//! Every mutating endpoint deserializes one of these forms and calls
//! `validate()` before touching the domain. Fields arrive as `Option<String>`
//! so that missing and present-but-blank inputs produce the same error.

use serde::{Deserialize, Serialize};

use crate::response::FieldError;

/// Maximum length of a post title.
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum length of a comment author name.
pub const AUTHOR_MAX_LEN: usize = 200;
/// Maximum length of a username.
pub const USERNAME_MAX_LEN: usize = 150;

const REQUIRED_MESSAGE: &str = "This field is required.";

/// Require a text field: present and non-empty after trimming.
fn require(field: &str, value: &Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.push(FieldError::new(field, REQUIRED_MESSAGE));
            None
        }
    }
}

/// Require a secret field: present and non-empty, whitespace preserved.
fn require_raw(
    field: &str,
    value: &Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.push(FieldError::new(field, REQUIRED_MESSAGE));
            None
        }
    }
}

fn check_max_len(field: &str, value: &Option<String>, max: usize, errors: &mut Vec<FieldError>) {
    if let Some(v) = value {
        let count = v.chars().count();
        if count > max {
            errors.push(FieldError::new(
                field,
                format!("Ensure this value has at most {max} characters (it has {count})."),
            ));
        }
    }
}

/// Payload for creating or editing a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// A `PostForm` that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub text: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<PostInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let title = require("title", &self.title, &mut errors);
        check_max_len("title", &title, TITLE_MAX_LEN, &mut errors);
        let text = require("text", &self.text, &mut errors);
        match (title, text) {
            (Some(title), Some(text)) if errors.is_empty() => Ok(PostInput { title, text }),
            _ => Err(errors),
        }
    }
}

/// Payload for adding a comment to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentForm {
    pub author: Option<String>,
    pub text: Option<String>,
}

/// A `CommentForm` that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentInput {
    pub author: String,
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<CommentInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let author = require("author", &self.author, &mut errors);
        check_max_len("author", &author, AUTHOR_MAX_LEN, &mut errors);
        let text = require("text", &self.text, &mut errors);
        match (author, text) {
            (Some(author), Some(text)) if errors.is_empty() => Ok(CommentInput { author, text }),
            _ => Err(errors),
        }
    }
}

/// Payload for registering a new user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A `UserForm` that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub username: String,
    pub password: String,
}

impl UserForm {
    pub fn validate(&self) -> Result<UserInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let username = require("username", &self.username, &mut errors);
        check_max_len("username", &username, USERNAME_MAX_LEN, &mut errors);
        let password = require_raw("password", &self.password, &mut errors);
        match (username, password) {
            (Some(username), Some(password)) if errors.is_empty() => Ok(UserInput {
                username,
                password,
            }),
            _ => Err(errors),
        }
    }
}

/// Payload for logging in. Both fields must be present; no other rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<UserInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let username = require("username", &self.username, &mut errors);
        let password = require_raw("password", &self.password, &mut errors);
        match (username, password) {
            (Some(username), Some(password)) => Ok(UserInput {
                username,
                password,
            }),
            _ => Err(errors),
        }
    }
}
