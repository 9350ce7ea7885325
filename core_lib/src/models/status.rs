//! Status-check ping records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::validate_non_empty;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "crate::models::datetime")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub const COLLECTION: &'static str = "status_checks";

    pub fn from_request(request: CreateStatusCheckRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: request.client_name.unwrap_or_default(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStatusCheckRequest {
    #[validate(required(message = "Client name is required"))]
    #[validate(custom(function = "validate_non_empty", message = "Client name cannot be empty"))]
    pub client_name: Option<String>,
}
