//! # Villain Store
//!
//! The villain service: an [`EntityStore`] owning [`Villain`] records plus
//! the typed [`VillainClient`](crate::clients::VillainClient).
//!
//! Villains obey the same resource contract as heroes (count, pagination,
//! random selection, insert, update by id, idempotent delete) but live in
//! their own store with their own id space. The random selection endpoint is
//! what the fight service leans on to pick an opponent.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::VillainClient;
use crate::model::Villain;
use entity_store::EntityStore;

/// Channel capacity of the villain store.
const BUFFER_SIZE: usize = 32;

/// Creates a new Villain store and its client.
pub fn new() -> (EntityStore<Villain>, VillainClient) {
    let (store, generic_client) = EntityStore::new(BUFFER_SIZE);
    let client = VillainClient::new(generic_client);
    (store, client)
}
