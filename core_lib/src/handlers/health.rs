//! Healthcheck handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::warn;

use crate::AppState;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    match state.documents.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "healthy",
                "store": "healthy",
                "version": state.version,
                "timestamp": chrono::Utc::now().timestamp(),
            })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unhealthy",
                    "store": "unreachable",
                    "version": state.version,
                    "timestamp": chrono::Utc::now().timestamp(),
                })),
            )
        }
    }
}
