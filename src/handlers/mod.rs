pub mod docs;
pub mod items;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

pub const SERVICE_NAME: &str = "item-registry-service";
pub const API_VERSION: &str = "1.0.0";

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Item Registry Service",
        "version": API_VERSION,
        "docs": "/docs",
        "redoc": "/redoc",
        "health": "/health",
        "metrics": "/metrics",
        "items": "/items",
    }))
}

/// Liveness/readiness probe. No dependency checks: if we answer, we're up.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now(),
            "version": API_VERSION,
            "service": SERVICE_NAME,
        })),
    )
}

/// Only `total_items` is live; the other two fields are fixed placeholders.
pub async fn metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let total_items = state.registry.read().await.len();
    Json(json!({
        "total_items": total_items,
        "uptime": "healthy",
        "requests_total": "counter_value_here",
    }))
}
