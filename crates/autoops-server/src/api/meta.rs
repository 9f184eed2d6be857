//! Service metadata - GET / and GET /health

use axum::{routing::get, Json, Router};
use serde::Serialize;

use autoops_core::AppState;

pub const SERVICE_NAME: &str = "autoops-api";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "AutoOps API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Autonomous Employee Operations - Shift Coverage System",
        "endpoints": {
            "health": "/health",
            "shift_coverage": "POST /event/shift-missing",
        },
    }))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
