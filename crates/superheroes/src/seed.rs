//! Starter rosters for the hero and villain stores.
//!
//! A fresh system boots with empty stores; these helpers populate them with
//! a small, fixed cast so the demo (and anyone poking at the clients) has
//! something to fight with. The rosters are plain data, the population size
//! is whatever the slices happen to hold.

use crate::clients::{HeroClient, VillainClient};
use crate::hero_store::HeroError;
use crate::model::{HeroCreate, VillainCreate};
use crate::villain_store::VillainError;
use tracing::info;

type Entry = (&'static str, Option<&'static str>, i32, &'static str);

const HERO_ROSTER: &[Entry] = &[
    (
        "Super Baguette",
        Some("Bread Man"),
        42,
        "Eats baguettes in less than a second",
    ),
    ("Chewbacca", None, 5, "Agility, martial arts, marksmanship"),
    (
        "Wonder Woman",
        Some("Diana Prince"),
        15,
        "Superhuman strength, flight, lasso of truth",
    ),
    ("Yoda", None, 25, "The Force"),
    ("Spider-Man", Some("Peter Parker"), 9, "Wall-crawling, spider sense"),
    ("Mister Fantastic", Some("Reed Richards"), 12, "Elasticity, genius intellect"),
];

const VILLAIN_ROSTER: &[Entry] = &[
    (
        "Super Chocolatine",
        Some("Pain au Chocolat"),
        6,
        "Melts in the sun",
    ),
    ("Darth Vader", Some("Anakin Skywalker"), 13, "The dark side of the Force"),
    ("Joker", None, 7, "Chaos, toxins, improbable escapes"),
    ("Lex Luthor", None, 11, "Genius intellect, power armor"),
    ("Loki", None, 14, "Illusions, shapeshifting"),
    ("Green Goblin", Some("Norman Osborn"), 8, "Goblin formula, glider arsenal"),
    ("Doctor Doom", Some("Victor von Doom"), 16, "Sorcery, technology, diplomacy"),
];

fn hero_candidate(&(name, other_name, level, powers): &Entry) -> HeroCreate {
    HeroCreate {
        name: name.to_string(),
        other_name: other_name.map(str::to_string),
        level,
        picture: None,
        powers: Some(powers.to_string()),
    }
}

fn villain_candidate(&(name, other_name, level, powers): &Entry) -> VillainCreate {
    VillainCreate {
        name: name.to_string(),
        other_name: other_name.map(str::to_string),
        level,
        picture: None,
        powers: Some(powers.to_string()),
    }
}

/// Insert the starter heroes. Answers how many were seeded.
pub async fn seed_heroes(client: &HeroClient) -> Result<usize, HeroError> {
    for entry in HERO_ROSTER {
        client.create_hero(hero_candidate(entry)).await?;
    }
    info!(count = HERO_ROSTER.len(), "Heroes seeded");
    Ok(HERO_ROSTER.len())
}

/// Insert the starter villains. Answers how many were seeded.
pub async fn seed_villains(client: &VillainClient) -> Result<usize, VillainError> {
    for entry in VILLAIN_ROSTER {
        client.create_villain(villain_candidate(entry)).await?;
    }
    info!(count = VILLAIN_ROSTER.len(), "Villains seeded");
    Ok(VILLAIN_ROSTER.len())
}
