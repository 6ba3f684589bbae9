//! Store contract implementation for the Hero domain type.
//!
//! Enables [`Hero`] to be managed by the generic
//! [`EntityStore`](entity_store::EntityStore).

use crate::model::{Hero, HeroCreate, HeroId};
use entity_store::{StoreEntity, ValidationError, Violations};

impl StoreEntity for Hero {
    type Id = HeroId;
    type Create = HeroCreate;

    fn id(&self) -> HeroId {
        self.id
    }

    fn from_create(id: HeroId, candidate: HeroCreate) -> Self {
        Self {
            id,
            name: candidate.name,
            other_name: candidate.other_name,
            level: candidate.level,
            picture: candidate.picture,
            powers: candidate.powers,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        violations.length("name", &self.name, 3, 50);
        violations.at_least("level", self.level, 1);
        violations.finish()
    }

    /// Every field except the id is replaceable.
    fn apply(&mut self, candidate: Self) {
        self.name = candidate.name;
        self.other_name = candidate.other_name;
        self.level = candidate.level;
        self.picture = candidate.picture;
        self.powers = candidate.powers;
    }
}
