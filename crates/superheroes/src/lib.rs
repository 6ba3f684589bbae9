//! # Superheroes
//!
//! An educational demo of store-per-resource services in Rust: heroes,
//! villains, and the fights between them.
//!
//! ## Core Components
//!
//! - **[model]**: pure data structures ([`Hero`](model::Hero),
//!   [`Villain`](model::Villain), [`Fight`](model::Fight)) with typed ids.
//! - **[hero_store] / [villain_store] / [fight_store]**: one
//!   [`EntityStore`](entity_store::EntityStore) per resource, each with its
//!   own error type and factory.
//! - **[clients]**: typed wrappers (e.g. [`HeroClient`](clients::HeroClient))
//!   that hide the message passing; the fight client also orchestrates the
//!   random-opponent draw across services.
//! - **[lifecycle]**: the [`SuperheroSystem`](lifecycle::SuperheroSystem)
//!   orchestrator plus tracing setup.
//! - **[health]**: liveness probes that round-trip a count per store.
//! - **[seed]**: starter rosters so a fresh system has someone to fight.
//!
//! ## Testing
//!
//! See [`entity_store::mock`] for utilities to test clients without
//! spawning any stores.

pub mod clients;
pub mod fight_store;
pub mod health;
pub mod hero_store;
pub mod lifecycle;
pub mod model;
pub mod seed;
pub mod villain_store;
