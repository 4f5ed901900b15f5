use std::collections::HashMap;

use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Errors returned by the trip, itinerary and expense services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {}", .0.summary())]
    Validation(ValidationFailure),

    /// Missing row or a row owned by someone else; callers can't tell which.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Database(err.into())
    }
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        let mut failure = ValidationFailure::default();
        failure.add(field, message, false);
        ServiceError::Validation(failure)
    }
}

/// Per-field validation messages, keyed by the client's field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationFailure {
    pub field_errors: HashMap<String, String>,
    missing: bool,
}

impl ValidationFailure {
    pub fn add(&mut self, field: &str, message: impl Into<String>, missing: bool) {
        self.missing |= missing;
        self.field_errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn summary(&self) -> &'static str {
        if self.missing {
            "Missing required fields"
        } else {
            "Invalid field values"
        }
    }
}
