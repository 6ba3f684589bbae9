//! # Villain Client
//!
//! Provides a high-level API for interacting with the villain store.
//! It wraps a `StoreClient<Villain>` and exposes domain-specific methods.
//! The fight service consumes [`find_random_villain`](VillainClient::find_random_villain)
//! to draw opponents, which is why that method gets a name of its own rather
//! than leaning on the generic trait method at call sites.

use crate::model::{Villain, VillainCreate};
use crate::villain_store::VillainError;
use async_trait::async_trait;
use entity_store::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the villain store.
#[derive(Clone)]
pub struct VillainClient {
    inner: StoreClient<Villain>,
}

impl VillainClient {
    pub fn new(inner: StoreClient<Villain>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Villain> for VillainClient {
    type Error = VillainError;

    fn inner(&self) -> &StoreClient<Villain> {
        &self.inner
    }

    fn map_error(e: StoreError) -> VillainError {
        match e {
            StoreError::NotFound(id) => VillainError::NotFound(id),
            StoreError::Validation(v) => VillainError::Validation(v),
            other => VillainError::StoreUnavailable(other.to_string()),
        }
    }
}

impl VillainClient {
    #[instrument(skip(self))]
    pub async fn create_villain(&self, candidate: VillainCreate) -> Result<Villain, VillainError> {
        debug!("Sending request");
        self.inner.insert(candidate).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, villain))]
    pub async fn update_villain(&self, villain: Villain) -> Result<Villain, VillainError> {
        debug!(id = %villain.id, "Sending request");
        self.inner.update(villain).await.map_err(Self::map_error)
    }

    /// Fetch one villain chosen uniformly at random over the current roster.
    /// `None` while the roster is empty.
    #[instrument(skip(self))]
    pub async fn find_random_villain(&self) -> Result<Option<Villain>, VillainError> {
        self.find_random().await
    }
}
