//! # Fight Client
//!
//! Provides a high-level API for interacting with the fight store, and the
//! cross-service orchestration that makes fights happen: drawing a random
//! hero and a random villain through their typed clients before the fight is
//! persisted.

use crate::clients::{HeroClient, VillainClient};
use crate::fight_store::FightError;
use crate::model::{Fight, Fighters};
use async_trait::async_trait;
use entity_store::{EntityClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the fight store.
///
/// Holds the hero and villain clients alongside the generic fight store
/// client: pairing up fighters is caller-side orchestration, while recording
/// the outcome is a plain insert into the fight store.
#[derive(Clone)]
pub struct FightClient {
    inner: StoreClient<Fight>,
    heroes: HeroClient,
    villains: VillainClient,
}

impl FightClient {
    pub fn new(inner: StoreClient<Fight>, heroes: HeroClient, villains: VillainClient) -> Self {
        Self {
            inner,
            heroes,
            villains,
        }
    }

    /// Draw one random hero and one random villain.
    ///
    /// An empty roster on either side maps to [`FightError::NoFighters`];
    /// a failing upstream service keeps its identity in the error.
    #[instrument(skip(self))]
    pub async fn random_fighters(&self) -> Result<Fighters, FightError> {
        debug!("Drawing random fighters");
        let hero = self
            .heroes
            .find_random_hero()
            .await
            .map_err(|e| FightError::HeroService(e.to_string()))?
            .ok_or(FightError::NoFighters)?;
        let villain = self
            .villains
            .find_random_villain()
            .await
            .map_err(|e| FightError::VillainService(e.to_string()))?
            .ok_or(FightError::NoFighters)?;
        Ok(Fighters { hero, villain })
    }

    /// Fight the given pair and persist the outcome.
    #[instrument(skip(self, fighters))]
    pub async fn perform_fight(&self, fighters: Fighters) -> Result<Fight, FightError> {
        info!(
            hero = %fighters.hero.name,
            villain = %fighters.villain.name,
            "Fight requested"
        );
        self.inner.insert(fighters).await.map_err(Self::map_error)
    }

    /// Draw random fighters and fight them in one call.
    #[instrument(skip(self))]
    pub async fn perform_random_fight(&self) -> Result<Fight, FightError> {
        let fighters = self.random_fighters().await?;
        self.perform_fight(fighters).await
    }
}

#[async_trait]
impl EntityClient<Fight> for FightClient {
    type Error = FightError;

    fn inner(&self) -> &StoreClient<Fight> {
        &self.inner
    }

    fn map_error(e: StoreError) -> FightError {
        match e {
            StoreError::NotFound(id) => FightError::NotFound(id),
            StoreError::Validation(v) => FightError::Validation(v),
            other => FightError::StoreUnavailable(other.to_string()),
        }
    }
}
