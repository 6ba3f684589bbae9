//! Typed clients for the three services.
//!
//! Each client wraps a generic [`StoreClient`](entity_store::StoreClient)
//! and exposes domain-specific methods with domain-specific errors, hiding
//! the message passing entirely. The shared read/delete operations come from
//! the [`EntityClient`](entity_store::EntityClient) trait.

pub mod fight_client;
pub mod hero_client;
pub mod villain_client;

pub use fight_client::FightClient;
pub use hero_client::HeroClient;
pub use villain_client::VillainClient;
