//! Error types for the fight service.

use entity_store::ValidationError;
use thiserror::Error;

/// Errors that can occur during fight operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FightError {
    /// The requested fight was not found.
    #[error("Fight not found: {0}")]
    NotFound(String),

    /// One of the rosters is empty, so no opponent could be drawn.
    #[error("No fighters available")]
    NoFighters,

    /// The hero service failed while picking a fighter.
    #[error("Hero service error: {0}")]
    HeroService(String),

    /// The villain service failed while picking a fighter.
    #[error("Villain service error: {0}")]
    VillainService(String),

    /// The fight data broke a field constraint.
    #[error("Invalid fight: {0}")]
    Validation(ValidationError),

    /// The fight store did not answer (closed channel or dropped response).
    #[error("Fight store unavailable: {0}")]
    StoreUnavailable(String),
}
