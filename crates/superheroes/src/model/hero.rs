use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Heroes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroId(pub u64);

impl From<u64> for HeroId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered hero.
///
/// The id is assigned by the hero store on creation and immutable afterwards.
/// `name` (3 to 50 characters) and `level` (at least 1) are validated before
/// the record is persisted; the remaining fields are optional flavor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub other_name: Option<String>,
    pub level: i32,
    pub picture: Option<String>,
    pub powers: Option<String>,
}

/// Candidate payload for creating a new hero (everything but the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCreate {
    pub name: String,
    pub other_name: Option<String>,
    pub level: i32,
    pub picture: Option<String>,
    pub powers: Option<String>,
}
