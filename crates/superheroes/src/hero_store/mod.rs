//! # Hero Store
//!
//! The hero service: an [`EntityStore`] owning [`Hero`] records plus the
//! typed [`HeroClient`](crate::clients::HeroClient) for talking to it.
//!
//! This is the simplest service in the system, a straight CRUD resource with
//! random selection and no dependencies on other services.
//!
//! ## Usage
//!
//! ```rust
//! use superheroes::hero_store;
//! use superheroes::model::HeroCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, client) = hero_store::new();
//!     tokio::spawn(store.run());
//!
//!     let candidate = HeroCreate {
//!         name: "Super Baguette".to_string(),
//!         other_name: None,
//!         level: 42,
//!         picture: None,
//!         powers: Some("Eats baguettes in less than a second".to_string()),
//!     };
//!     let hero = client.create_hero(candidate).await?;
//!     assert_eq!(hero.level, 42);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::HeroClient;
use crate::model::Hero;
use entity_store::EntityStore;

/// Channel capacity of the hero store.
const BUFFER_SIZE: usize = 32;

/// Creates a new Hero store and its client.
pub fn new() -> (EntityStore<Hero>, HeroClient) {
    let (store, generic_client) = EntityStore::new(BUFFER_SIZE);
    let client = HeroClient::new(generic_client);
    (store, client)
}
