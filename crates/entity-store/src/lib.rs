//! # Entity Store
//!
//! This crate provides the foundational building blocks for type-safe,
//! concurrent entity stores in Rust. Each store is an actor that owns the
//! records of one entity type and serves the standard resource operations
//! over a message channel: count, paginated listing, random selection,
//! lookup by id, insert, update by id, and delete by id.
//!
//! ## Why a Store-per-Resource Actor?
//!
//! A CRUD service is mostly a table with a lifecycle around it. Putting that
//! table inside an actor gives us two things at once:
//!
//! - **Isolated state**: the record map is owned by exactly one task, so no
//!   `Mutex` or `RwLock` ever guards it.
//! - **Sequential writes**: messages are processed one at a time, which means
//!   a completed insert is visible to every later count, list, or lookup
//!   (read-after-write per record, with no extra coordination).
//!
//! Multiple stores (heroes, villains, fights, ...) run in parallel as
//! independent tasks and talk to each other only through clients.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - your domain model, its constraints
//!    and its update semantics
//! 2. **Runtime Layer** ([`EntityStore`]) - message processing, id
//!    assignment, and record ownership
//! 3. **Interface Layer** ([`StoreClient`], [`EntityClient`]) - type-safe
//!    async communication
//!
//! You describe your entity once in the trait, and the store handles the
//! message passing, validation flow, and state management.
//!
//! ```rust
//! use entity_store::{EntityStore, StoreEntity, Violations, ValidationError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Gadget {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug)]
//! struct GadgetCreate {
//!     name: String,
//! }
//!
//! impl StoreEntity for Gadget {
//!     type Id = u64;
//!     type Create = GadgetCreate;
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn from_create(id: u64, candidate: GadgetCreate) -> Self {
//!         Self { id, name: candidate.name }
//!     }
//!
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         let mut violations = Violations::new();
//!         violations.length("name", &self.name, 1, 50);
//!         violations.finish()
//!     }
//!
//!     fn apply(&mut self, candidate: Self) {
//!         self.name = candidate.name;
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = EntityStore::<Gadget>::new(10);
//!     tokio::spawn(store.run());
//!
//!     let gadget = client.insert(GadgetCreate { name: "Widget".into() }).await.unwrap();
//!     let found = client.find(gadget.id).await.unwrap().unwrap();
//!     assert_eq!(found, gadget);
//!     assert_eq!(client.count().await.unwrap(), 1);
//! }
//! ```
//!
//! ## Failure Semantics
//!
//! - Constraint violations reject the write with per-field detail
//!   ([`ValidationError`]) and never leave a partial record behind.
//! - Absence is an expected outcome: lookups return `Option`, delete returns
//!   whether anything was removed, and only update-by-id reports
//!   [`StoreError::NotFound`] (the candidate names an id that must exist).
//! - A closed or dropped channel surfaces as the store-unavailable class of
//!   [`StoreError`]; the store never retries on the caller's behalf.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockStore` that answers through the same
//! [`StoreClient`] API entirely in-memory, so client logic can be tested
//! without spawning any store task.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod validate;

// Re-export core types for convenience
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use store::EntityStore;
pub use validate::{ConstraintViolation, ValidationError, Violations};
