//! Status-check creation and listing handlers

use axum::{extract::State, Json};

use crate::{
    database::LIST_CAP,
    error::{AppError, Result},
    extractors::ApiJson,
    models::{CreateStatusCheckRequest, StatusCheck},
    validation::Validatable,
    AppState,
};

pub async fn create_status_check(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheck>> {
    let validation = payload.validate_payload();
    if !validation.is_valid {
        return Err(AppError::Validation(validation));
    }

    let check = StatusCheck::from_request(payload);
    state.documents.insert(StatusCheck::COLLECTION, &check).await?;

    Ok(Json(check))
}

pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>> {
    let checks = state
        .documents
        .list(StatusCheck::COLLECTION, LIST_CAP)
        .await?;
    Ok(Json(checks))
}
