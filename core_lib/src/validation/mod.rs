//! Input validation for inbound payloads

pub mod rules;

pub use rules::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        let mut result = Self {
            is_valid: false,
            errors: HashMap::new(),
        };

        for (field, field_errors) in errors.field_errors() {
            let mut messages = Vec::new();

            for error in field_errors {
                if let Some(message) = &error.message {
                    messages.push(message.to_string());
                } else {
                    messages.push(format!("Validation failed for field '{}'", field));
                }
            }

            result.errors.insert(field.to_string(), messages);
        }

        result
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors
            .entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message.to_string());
    }
}

pub trait Validatable {
    fn validate_payload(&self) -> ValidationResult;
}

impl<T> Validatable for T
where
    T: Validate,
{
    fn validate_payload(&self) -> ValidationResult {
        match self.validate() {
            Ok(_) => ValidationResult::success(),
            Err(errors) => ValidationResult::from_validation_errors(errors),
        }
    }
}
