//! HTTP handlers for API endpoints.

use crate::reading::Reading;
use crate::web::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use serde_json::json;
use tracing::error;

/// Dashboard page bundled into the binary, served when no static directory exists.
pub const DASHBOARD_HTML: &str = include_str!("../../site/index.html");

/// Every stored reading, newest first.
pub async fn list_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reading>>, StatusCode> {
    match state.store.list().await {
        Ok(readings) => Ok(Json(readings)),
        Err(e) => {
            error!("Failed to list readings: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "pi-weather-station",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Serve the bundled dashboard page.
pub async fn default_index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
