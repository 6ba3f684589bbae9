//! Store contract implementation for the Fight domain type.
//!
//! The interesting part is [`StoreEntity::from_create`]: the candidate is a
//! [`Fighters`] pair, and building the record *is* the fight. The higher
//! level wins; equal levels are settled by a coin flip.

use crate::model::{Fight, FightId, Fighters};
use chrono::Utc;
use entity_store::{StoreEntity, ValidationError};
use rand::Rng;
use std::cmp::Ordering;

impl StoreEntity for Fight {
    type Id = FightId;
    type Create = Fighters;

    fn id(&self) -> FightId {
        self.id
    }

    fn from_create(id: FightId, fighters: Fighters) -> Self {
        let Fighters { hero, villain } = fighters;
        let hero_wins = match hero.level.cmp(&villain.level) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => rand::rng().random_bool(0.5),
        };

        let (winner_name, winner_level, winner_picture, loser_name, loser_level, loser_picture) =
            if hero_wins {
                (
                    hero.name,
                    hero.level,
                    hero.picture,
                    villain.name,
                    villain.level,
                    villain.picture,
                )
            } else {
                (
                    villain.name,
                    villain.level,
                    villain.picture,
                    hero.name,
                    hero.level,
                    hero.picture,
                )
            };

        Self {
            id,
            fight_date: Utc::now(),
            winner_name,
            winner_level,
            winner_picture,
            loser_name,
            loser_level,
            loser_picture,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        // The fighters were validated by their own stores; the outcome
        // fields are snapshots of already-constrained records.
        Ok(())
    }

    fn apply(&mut self, candidate: Self) {
        self.fight_date = candidate.fight_date;
        self.winner_name = candidate.winner_name;
        self.winner_level = candidate.winner_level;
        self.winner_picture = candidate.winner_picture;
        self.loser_name = candidate.loser_name;
        self.loser_level = candidate.loser_level;
        self.loser_picture = candidate.loser_picture;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hero, HeroId, Villain, VillainId};

    fn hero(name: &str, level: i32) -> Hero {
        Hero {
            id: HeroId(1),
            name: name.to_string(),
            other_name: None,
            level,
            picture: None,
            powers: None,
        }
    }

    fn villain(name: &str, level: i32) -> Villain {
        Villain {
            id: VillainId(1),
            name: name.to_string(),
            other_name: None,
            level,
            picture: None,
            powers: None,
        }
    }

    #[test]
    fn higher_level_hero_wins() {
        let fight = Fight::from_create(
            FightId(1),
            Fighters {
                hero: hero("Super Baguette", 42),
                villain: villain("Super Chocolatine", 6),
            },
        );
        assert_eq!(fight.winner_name, "Super Baguette");
        assert_eq!(fight.winner_level, 42);
        assert_eq!(fight.loser_name, "Super Chocolatine");
        assert_eq!(fight.loser_level, 6);
    }

    #[test]
    fn higher_level_villain_wins() {
        let fight = Fight::from_create(
            FightId(1),
            Fighters {
                hero: hero("Sidekick", 2),
                villain: villain("Darth Invader", 40),
            },
        );
        assert_eq!(fight.winner_name, "Darth Invader");
        assert_eq!(fight.loser_name, "Sidekick");
    }

    #[test]
    fn equal_levels_settle_on_one_of_the_two() {
        let fight = Fight::from_create(
            FightId(1),
            Fighters {
                hero: hero("Even Steven", 10),
                villain: villain("Steven Even", 10),
            },
        );
        assert!(fight.winner_name == "Even Steven" || fight.winner_name == "Steven Even");
        assert_ne!(fight.winner_name, fight.loser_name);
        assert_eq!(fight.winner_level, 10);
        assert_eq!(fight.loser_level, 10);
    }
}
