//! Session extractors.
//!
//! `Identity` requires a valid session and sends anonymous callers to the
//! login page. `OptionalIdentity` never fails; routes gated on a post
//! permission call [`OptionalIdentity::require`], which sends both anonymous
//! and under-privileged callers to the access denied page.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use quill_core::domain::Permission;
use quill_core::ports::{SessionClaims, SessionService};

use super::error::AppError;

/// Name of the HttpOnly cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user identity extractor.
///
/// Use this in handlers to require a logged-in caller:
/// ```ignore
/// async fn drafts(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub permissions: Vec<Permission>,
}

impl Identity {
    /// Check whether this user holds a specific permission.
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl From<SessionClaims> for Identity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            permissions: claims.permissions,
        }
    }
}

/// Pull the session token from the Authorization header or, failing that,
/// from the session cookie.
fn token_from_request(req: &HttpRequest) -> Option<String> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        if let Ok(auth_str) = value.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let sessions = match req.app_data::<web::Data<Arc<dyn SessionService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("SessionService not found in app data");
                return ready(Err(AppError::Internal(
                    "Server configuration error".to_string(),
                )));
            }
        };

        let token = match token_from_request(req) {
            Some(t) => t,
            None => return ready(Err(AppError::LoginRequired)),
        };

        match sessions.verify(&token) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => {
                tracing::debug!("Rejected session token: {}", e);
                ready(Err(AppError::LoginRequired))
            }
        }
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl OptionalIdentity {
    /// Resolve to an identity holding `permission`.
    ///
    /// Anonymous callers are denied too, not sent to login: permission
    /// failures always land on the access denied page.
    pub fn require(self, permission: Permission) -> Result<Identity, AppError> {
        match self.0 {
            Some(identity) if identity.can(permission) => Ok(identity),
            _ => Err(AppError::PermissionDenied),
        }
    }
}

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => ready(Ok(OptionalIdentity(Some(identity)))),
            Err(_) => ready(Ok(OptionalIdentity(None))),
        }
    }
}
