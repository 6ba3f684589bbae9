//! # Fight Store
//!
//! The fight service records the outcomes of hero-versus-villain fights.
//!
//! Unlike heroes and villains, a fight is not submitted field by field: the
//! candidate payload is a [`Fighters`](crate::model::Fighters) pair, and the
//! outcome (winner, loser, timestamp) is computed when the record is
//! persisted. The pairing itself comes from the hero and villain services,
//! fetched through their typed clients by the
//! [`FightClient`](crate::clients::FightClient); that wiring happens in the
//! [`lifecycle`](crate::lifecycle) module.
//!
//! ## Outcome Rules
//!
//! The higher level wins. Equal levels are settled by a coin flip, so a
//! rematch between the same fighters can go either way.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Fight;
use entity_store::{EntityStore, StoreClient};

/// Channel capacity of the fight store.
const BUFFER_SIZE: usize = 32;

/// Creates a new Fight store and its generic client.
///
/// The generic client is wrapped into a
/// [`FightClient`](crate::clients::FightClient) together with the hero and
/// villain clients it orchestrates.
pub fn new() -> (EntityStore<Fight>, StoreClient<Fight>) {
    EntityStore::new(BUFFER_SIZE)
}
