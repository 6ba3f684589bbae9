//! Error types for the hero service.

use entity_store::ValidationError;
use thiserror::Error;

/// Errors that can occur during hero operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HeroError {
    /// The requested hero was not found.
    #[error("Hero not found: {0}")]
    NotFound(String),

    /// The hero data provided broke a field constraint.
    #[error("Invalid hero: {0}")]
    Validation(ValidationError),

    /// The hero store did not answer (closed channel or dropped response).
    #[error("Hero store unavailable: {0}")]
    StoreUnavailable(String),
}
