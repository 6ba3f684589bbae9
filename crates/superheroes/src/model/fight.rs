use crate::model::{Hero, Villain};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Fights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FightId(pub u64);

impl From<u64> for FightId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for FightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The recorded outcome of a fight between one hero and one villain.
///
/// The winner and loser columns are denormalized snapshots of the fighters
/// at the time of the fight; later edits to the hero or villain do not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: FightId,
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_level: i32,
    pub winner_picture: Option<String>,
    pub loser_name: String,
    pub loser_level: i32,
    pub loser_picture: Option<String>,
}

/// A hero/villain pair about to fight. This is the candidate payload of the
/// fight store; the outcome is computed when the fight is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighters {
    pub hero: Hero,
    pub villain: Villain,
}
