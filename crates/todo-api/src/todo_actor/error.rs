//! Error types for the Todo service.

use crate::schema::{violation_summary, Violation};
use thiserror::Error;

/// Errors that can occur during todo operations.
///
/// `NotFound` and `ValidationFailed` are the service's domain taxonomy: both
/// are terminal, non-retryable statements about the current request or store
/// contents. `StoreUnavailable` covers channel failures between the service
/// and the store actor and is never conflated with the domain taxonomy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TodoError {
    /// The referenced id has no corresponding record.
    #[error("Todo {0} not found")]
    NotFound(String),

    /// The payload (or a pagination parameter) violates the schema. Carries
    /// every violated field so the transport can render field-level detail.
    #[error("Validation failed: {}", violation_summary(.0))]
    ValidationFailed(Vec<Violation>),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreUnavailable(String),
}

impl TodoError {
    /// The HTTP status a compatible transport should render this error as.
    pub fn http_status(&self) -> u16 {
        match self {
            TodoError::NotFound(_) => 404,
            TodoError::ValidationFailed(_) => 422,
            TodoError::StoreUnavailable(_) => 500,
        }
    }
}

impl From<String> for TodoError {
    fn from(msg: String) -> Self {
        TodoError::StoreUnavailable(msg)
    }
}
