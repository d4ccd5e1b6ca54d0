//! Error handling - RFC 7807 responses plus the in-site redirect flows.
//!
//! Two failures deliberately do not produce an error status: an anonymous
//! caller on a login-gated route is sent to the login page, and a caller
//! lacking a post permission is sent to the access denied page. Everything
//! else renders as an RFC 7807 problem document.

use std::fmt;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

use quill_core::error::RepoError;
use quill_shared::{ErrorResponse, FieldError};

/// Where anonymous callers of login-gated routes are sent.
pub const LOGIN_URL: &str = "/accounts/login/";

/// Where callers without the required permission are sent.
pub const ACCESS_DENIED_URL: &str = "/access_denied/";

/// 303 See Other pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// No valid session on a route that needs one; redirects to login.
    LoginRequired,
    /// Session present but the required permission is missing; redirects
    /// to the access denied page rather than failing with a bare 403.
    PermissionDenied,
    /// Bad credentials at login.
    Unauthorized,
    Conflict(String),
    Validation(Vec<FieldError>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::LoginRequired => write!(f, "Login required"),
            AppError::PermissionDenied => write!(f, "Permission denied"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::LoginRequired | AppError::PermissionDenied => StatusCode::SEE_OTHER,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::LoginRequired => return redirect(LOGIN_URL),
            AppError::PermissionDenied => return redirect(ACCESS_DENIED_URL),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(
                "Please enter a correct username and password. \
                 Note that both fields may be case-sensitive.",
            ),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from persistence errors
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
