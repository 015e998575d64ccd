//! Liveness endpoint for load balancers and deploy checks.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`. `storage` names the adapter the post service runs
/// on, so a silent fallback to memory is visible from outside.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub timestamp: String,
}

/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage.as_str(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
