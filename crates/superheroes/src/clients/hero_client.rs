//! # Hero Client
//!
//! Provides a high-level API for interacting with the hero store.
//! It wraps a `StoreClient<Hero>` and exposes domain-specific methods.

use crate::hero_store::HeroError;
use crate::model::{Hero, HeroCreate};
use async_trait::async_trait;
use entity_store::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the hero store.
#[derive(Clone)]
pub struct HeroClient {
    inner: StoreClient<Hero>,
}

impl HeroClient {
    pub fn new(inner: StoreClient<Hero>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Hero> for HeroClient {
    type Error = HeroError;

    fn inner(&self) -> &StoreClient<Hero> {
        &self.inner
    }

    fn map_error(e: StoreError) -> HeroError {
        match e {
            StoreError::NotFound(id) => HeroError::NotFound(id),
            StoreError::Validation(v) => HeroError::Validation(v),
            other => HeroError::StoreUnavailable(other.to_string()),
        }
    }
}

impl HeroClient {
    // Write paths need typed payloads, so they are spelled out here instead
    // of coming from the trait defaults.

    #[instrument(skip(self))]
    pub async fn create_hero(&self, candidate: HeroCreate) -> Result<Hero, HeroError> {
        debug!("Sending request");
        self.inner.insert(candidate).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, hero))]
    pub async fn update_hero(&self, hero: Hero) -> Result<Hero, HeroError> {
        debug!(id = %hero.id, "Sending request");
        self.inner.update(hero).await.map_err(Self::map_error)
    }

    /// Fetch one hero chosen uniformly at random over the current roster.
    /// `None` while the roster is empty.
    #[instrument(skip(self))]
    pub async fn find_random_hero(&self) -> Result<Option<Hero>, HeroError> {
        self.find_random().await
    }
}
