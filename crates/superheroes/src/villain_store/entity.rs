//! Store contract implementation for the Villain domain type.

use crate::model::{Villain, VillainCreate, VillainId};
use entity_store::{StoreEntity, ValidationError, Violations};

impl StoreEntity for Villain {
    type Id = VillainId;
    type Create = VillainCreate;

    fn id(&self) -> VillainId {
        self.id
    }

    fn from_create(id: VillainId, candidate: VillainCreate) -> Self {
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

    fn apply(&mut self, candidate: Self) {
        self.name = candidate.name;
        self.other_name = candidate.other_name;
        self.level = candidate.level;
        self.picture = candidate.picture;
        self.powers = candidate.powers;
    }
}
