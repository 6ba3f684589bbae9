//! Domain models for the superheroes system.
//!
//! Pure data structures: the persisted entities ([`Hero`], [`Villain`],
//! [`Fight`]), their typed ids, and the candidate payloads submitted for
//! creation. The store behavior lives in the per-service modules
//! (`hero_store`, `villain_store`, `fight_store`).

pub mod fight;
pub mod hero;
pub mod villain;

pub use fight::{Fight, FightId, Fighters};
pub use hero::{Hero, HeroCreate, HeroId};
pub use villain::{Villain, VillainCreate, VillainId};
