//! # Store Errors
//!
//! This module defines the common error type shared by every store and
//! client. Centralizing the definitions keeps error handling consistent
//! across all entity types.

use crate::validate::ValidationError;

/// Errors that can occur when talking to an [`EntityStore`](crate::EntityStore).
///
/// `Closed` and `Dropped` are the store-unavailable class: the request never
/// completed because the channel to the store is gone. They are fatal to the
/// request and are not retried here; retry policy, if any, belongs to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store closed")]
    Closed,
    #[error("store dropped response channel")]
    Dropped,
    #[error("entity not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
