//! Static pages and operational endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct AccessDeniedPage {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Fixed access denied page - the redirect target for permission failures.
///
/// GET /access_denied/
pub async fn access_denied() -> HttpResponse {
    HttpResponse::Ok().json(AccessDeniedPage {
        title: "Access denied",
        detail: "You do not have permission to perform this action.",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /health/
pub async fn health(_state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
