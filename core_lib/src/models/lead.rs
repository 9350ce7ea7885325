//! Lead records captured from contact-form submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::{validate_email, validate_non_empty};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub suburb: String,
    #[serde(default)]
    pub message: String,
    #[serde(with = "crate::models::datetime")]
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub const COLLECTION: &'static str = "leads";

    /// Stamps a fresh id and creation time and copies the declared
    /// fields verbatim. Only the creation handler calls this; the read
    /// path never regenerates either generated field.
    pub fn from_request(request: CreateLeadRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            suburb: request.suburb.unwrap_or_default(),
            message: request.message.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

/// Creation payload. Fields are optional at the serde layer so a
/// missing field surfaces as a per-field validation error instead of a
/// deserialization failure. Unknown fields are discarded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(required(message = "Name is required"))]
    #[validate(custom(function = "validate_non_empty", message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"))]
    #[validate(custom(function = "validate_email", message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(required(message = "Phone is required"))]
    #[validate(custom(function = "validate_non_empty", message = "Phone cannot be empty"))]
    pub phone: Option<String>,

    #[validate(required(message = "Suburb is required"))]
    #[validate(custom(function = "validate_non_empty", message = "Suburb cannot be empty"))]
    pub suburb: Option<String>,

    pub message: Option<String>,
}
