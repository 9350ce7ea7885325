//! Lead creation and listing handlers

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    database::LIST_CAP,
    error::{AppError, Result},
    extractors::ApiJson,
    models::{CreateLeadRequest, Lead},
    validation::Validatable,
    AppState,
};

pub async fn create_lead(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateLeadRequest>,
) -> Result<Json<Lead>> {
    let validation = payload.validate_payload();
    if !validation.is_valid {
        return Err(AppError::Validation(validation));
    }

    let lead = Lead::from_request(payload);
    state.documents.insert(Lead::COLLECTION, &lead).await?;

    info!(
        name = %lead.name,
        email = %lead.email,
        suburb = %lead.suburb,
        "new lead submitted"
    );

    Ok(Json(lead))
}

pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>> {
    let leads = state.documents.list(Lead::COLLECTION, LIST_CAP).await?;
    Ok(Json(leads))
}
