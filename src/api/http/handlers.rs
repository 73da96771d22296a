// src/api/http/handlers.rs

use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

/// Health check handler. Deliberately independent of the feedback service so
/// monitoring keeps working even when the provider is down.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
