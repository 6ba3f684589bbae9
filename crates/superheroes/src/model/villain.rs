use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Villains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VillainId(pub u64);

impl From<u64> for VillainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for VillainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered villain. Structurally the mirror image of a hero; the two
/// live in separate stores with separate id spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villain {
    pub id: VillainId,
    pub name: String,
    pub other_name: Option<String>,
    pub level: i32,
    pub picture: Option<String>,
    pub powers: Option<String>,
}

/// Candidate payload for creating a new villain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillainCreate {
    pub name: String,
    pub other_name: Option<String>,
    pub level: i32,
    pub picture: Option<String>,
    pub powers: Option<String>,
}
