//! Route table and the API root handler

use crate::{handlers, AppState};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(handle_root))
        .route(
            "/api/leads",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        .route(
            "/api/status",
            get(handlers::status::list_status_checks).post(handlers::status::create_status_check),
        )
        .route("/health", get(handlers::health::handle_health))
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("{} API", state.app_name),
    }))
}
