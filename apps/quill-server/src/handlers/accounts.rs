//! Account handlers: self-registration, login, logout.

use std::sync::Arc;

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::http::header;
use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PasswordService, SessionService, UserRepository};
use quill_shared::FieldError;
use quill_shared::dto::{AuthResponse, FormField, FormResponse};
use quill_shared::forms::{LoginForm, UserForm};

use crate::middleware::auth::SESSION_COOKIE;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const TOKEN_TYPE: &str = "Bearer";

fn session_cookie(token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

fn username_taken() -> AppError {
    AppError::Validation(vec![FieldError::new(
        "username",
        "A user with that username already exists.",
    )])
}

fn account_form_fields() -> Vec<FormField> {
    vec![
        FormField::required("username"),
        FormField::required("password"),
    ]
}

/// GET /user/new/
pub async fn register_form() -> HttpResponse {
    HttpResponse::Ok().json(FormResponse::new("user", account_form_fields()))
}

/// POST /user/new/
///
/// Creates the account, logs the new user in, and redirects to the post
/// list. New accounts start with no permissions.
pub async fn register(
    state: web::Data<AppState>,
    sessions: web::Data<Arc<dyn SessionService>>,
    passwords: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<UserForm>,
) -> AppResult<HttpResponse> {
    let input = body.validate()?;

    if state
        .users
        .find_by_username(&input.username)
        .await?
        .is_some()
    {
        return Err(username_taken());
    }

    let password_hash = passwords
        .hash(&input.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = match state.users.save(User::new(input.username, password_hash)).await {
        Ok(user) => user,
        // A concurrent registration of the same name trips the unique
        // constraint even after the pre-check passed.
        Err(RepoError::Constraint(_)) => return Err(username_taken()),
        Err(e) => return Err(e.into()),
    };

    let token = sessions
        .issue(user.id, &user.username, &user.permissions)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(session_cookie(&token, sessions.expiration_seconds()))
        .finish())
}

/// GET /accounts/login/
pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok().json(FormResponse::new("login", account_form_fields()))
}

/// POST /accounts/login/
///
/// Returns the session token in the body for bearer use and also sets the
/// session cookie.
pub async fn login(
    state: web::Data<AppState>,
    sessions: web::Data<Arc<dyn SessionService>>,
    passwords: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginForm>,
) -> AppResult<HttpResponse> {
    let input = body.validate()?;

    let user = state
        .users
        .find_by_username(&input.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = passwords
        .verify(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = sessions
        .issue(user.id, &user.username, &user.permissions)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&token, sessions.expiration_seconds()))
        .json(AuthResponse {
            access_token: token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: sessions.expiration_seconds() as u64,
        }))
}

/// GET,POST /accounts/logout/
///
/// Sessions are stateless tokens, so logout just expires the cookie.
pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(cookie)
        .finish()
}
