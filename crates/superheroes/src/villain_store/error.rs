//! Error types for the villain service.

use entity_store::ValidationError;
use thiserror::Error;

/// Errors that can occur during villain operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VillainError {
    /// The requested villain was not found.
    #[error("Villain not found: {0}")]
    NotFound(String),

    /// The villain data provided broke a field constraint.
    #[error("Invalid villain: {0}")]
    Validation(ValidationError),

    /// The villain store did not answer (closed channel or dropped response).
    #[error("Villain store unavailable: {0}")]
    StoreUnavailable(String),
}
