//! Monster and spell entries kept on the sheet.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh identifier for a list entry.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// A bestiary entry recorded during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique identifier.
    pub id: String,
    /// Name as typed by the player.
    pub name: String,
    /// Monster skill score.
    pub skill: u32,
    /// Monster stamina score.
    pub stamina: u32,
}

impl Monster {
    /// Create a monster with zeroed scores and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_entry_id(),
            name: name.into(),
            skill: 0,
            stamina: 0,
        }
    }
}

/// The monster property an update targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterUpdate {
    /// Rename the monster.
    Name(String),
    /// Set skill; negative values are floored at zero.
    Skill(i64),
    /// Set stamina; negative values are floored at zero.
    Stamina(i64),
}

impl MonsterUpdate {
    /// Return a copy of `monster` with this update applied.
    pub fn apply_to(&self, monster: &Monster) -> Monster {
        let mut next = monster.clone();
        match self {
            Self::Name(name) => next.name.clone_from(name),
            Self::Skill(value) => next.skill = floor_at_zero(*value),
            Self::Stamina(value) => next.stamina = floor_at_zero(*value),
        }
        next
    }
}

fn floor_at_zero(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// A memorized spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Unique identifier.
    pub id: String,
    /// Name as typed by the player.
    pub name: String,
    /// Whether the spell has been cast.
    pub used: bool,
}

impl Spell {
    /// Create an unused spell with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_entry_id(),
            name: name.into(),
            used: false,
        }
    }
}
