//! The adventure sheet record.
//!
//! [`GameState`] is the single unit of persistence. It is serialized with
//! the camelCase keys existing saves use (`spellsList`,
//! `currentParagraph`).

pub mod attribute;
pub mod roster;

pub use attribute::{Attribute, AttributeField};
pub use roster::{Monster, MonsterUpdate, Spell};

use serde::{Deserialize, Serialize};

/// Provisions a new hero starts with.
pub const STARTING_PROVISIONS: u32 = 10;

/// Gold a new hero starts with.
pub const STARTING_GOLD: &str = "0";

/// Stamina below which (and above zero) the hero is close to death.
pub const NEAR_DEATH_STAMINA: u32 = 5;

/// One of the three hero attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Fighting ability.
    Skill,
    /// Health.
    Stamina,
    /// Fortune, spent when tested.
    Luck,
}

/// A free-text field on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Carried items.
    Equipment,
    /// Gold, kept as text so annotations like "12 + ring" survive.
    Gold,
    /// Player notes.
    Notes,
    /// The paragraph the reader is on.
    CurrentParagraph,
}

/// The complete state of one hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Skill attribute.
    pub skill: Attribute,
    /// Stamina attribute.
    pub stamina: Attribute,
    /// Luck attribute.
    pub luck: Attribute,
    /// Free-text inventory.
    pub equipment: String,
    /// Free-text gold.
    pub gold: String,
    /// Memorized spells, in the order they were added.
    #[serde(rename = "spellsList")]
    pub spells: Vec<Spell>,
    /// Meals left.
    pub provisions: u32,
    /// Monsters met, in the order they were added.
    pub monsters: Vec<Monster>,
    /// Free-text notes.
    pub notes: String,
    /// Current paragraph reference.
    pub current_paragraph: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            skill: Attribute::default(),
            stamina: Attribute::default(),
            luck: Attribute::default(),
            equipment: String::new(),
            gold: STARTING_GOLD.to_string(),
            spells: Vec::new(),
            provisions: STARTING_PROVISIONS,
            monsters: Vec::new(),
            notes: String::new(),
            current_paragraph: String::new(),
        }
    }
}

impl GameState {
    /// Read one attribute.
    pub fn attribute(&self, kind: AttributeKind) -> Attribute {
        match kind {
            AttributeKind::Skill => self.skill,
            AttributeKind::Stamina => self.stamina,
            AttributeKind::Luck => self.luck,
        }
    }

    /// Mutable access to one attribute.
    pub(crate) fn attribute_mut(&mut self, kind: AttributeKind) -> &mut Attribute {
        match kind {
            AttributeKind::Skill => &mut self.skill,
            AttributeKind::Stamina => &mut self.stamina,
            AttributeKind::Luck => &mut self.luck,
        }
    }

    /// Read one text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Equipment => &self.equipment,
            TextField::Gold => &self.gold,
            TextField::Notes => &self.notes,
            TextField::CurrentParagraph => &self.current_paragraph,
        }
    }

    /// Mutable access to one text field.
    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Equipment => &mut self.equipment,
            TextField::Gold => &mut self.gold,
            TextField::Notes => &mut self.notes,
            TextField::CurrentParagraph => &mut self.current_paragraph,
        }
    }

    /// Find a monster by id.
    pub fn monster(&self, id: &str) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Find a spell by id.
    pub fn spell(&self, id: &str) -> Option<&Spell> {
        self.spells.iter().find(|s| s.id == id)
    }

    /// True while stamina is low but the hero still lives.
    pub fn is_near_death(&self) -> bool {
        self.stamina.current > 0 && self.stamina.current < NEAR_DEATH_STAMINA
    }
}
