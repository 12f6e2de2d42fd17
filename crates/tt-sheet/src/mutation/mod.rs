//! Mutations of the adventure sheet.
//!
//! Every operation is a pure function from the current record to a new one.
//! Invalid targets (unknown ids, blank names, no provisions left) return an
//! unchanged copy rather than an error. [`Mutation`] names the closed set so
//! the store has a single entry point.

pub mod resolve;

pub use resolve::{
    ATTACK_RESULT_TTL, LUCK_RESULT_TTL, LuckTest, apply_luck_test, resolve_attack,
    resolve_luck_test, roll_dice,
};

use serde::{Deserialize, Serialize};

use crate::cue::Cue;
use crate::model::attribute::apply_delta;
use crate::model::{
    AttributeField, AttributeKind, GameState, Monster, MonsterUpdate, Spell, TextField,
};

/// Stamina restored by one provision.
pub const PROVISION_STAMINA: u32 = 4;

/// A named change to the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Move one half of an attribute by `delta`, floored at zero.
    AdjustAttribute {
        /// Which attribute.
        attribute: AttributeKind,
        /// Which half.
        field: AttributeField,
        /// Signed change.
        delta: i64,
    },
    /// Replace a text field verbatim.
    SetText {
        /// Which field.
        field: TextField,
        /// New contents.
        value: String,
    },
    /// Eat a meal.
    ConsumeProvision,
    /// Move the provision count by `delta`, floored at zero.
    AdjustProvisions {
        /// Signed change.
        delta: i64,
    },
    /// Append a monster unless the name is blank.
    AddMonster {
        /// Name as typed.
        name: String,
    },
    /// Change one property of a monster.
    UpdateMonster {
        /// Target monster.
        id: String,
        /// The change.
        update: MonsterUpdate,
    },
    /// Remove a monster.
    RemoveMonster {
        /// Target monster.
        id: String,
    },
    /// Append a spell unless the name is blank.
    AddSpell {
        /// Name as typed.
        name: String,
    },
    /// Flip a spell's used flag.
    ToggleSpell {
        /// Target spell.
        id: String,
    },
    /// Remove a spell.
    RemoveSpell {
        /// Target spell.
        id: String,
    },
    /// Start a fresh sheet.
    Reset,
}

impl Mutation {
    /// Produce the record that results from applying this mutation.
    pub fn apply(&self, state: &GameState) -> GameState {
        match self {
            Self::AdjustAttribute {
                attribute,
                field,
                delta,
            } => adjust_attribute(state, *attribute, *field, *delta),
            Self::SetText { field, value } => set_text(state, *field, value),
            Self::ConsumeProvision => consume_provision(state),
            Self::AdjustProvisions { delta } => adjust_provisions(state, *delta),
            Self::AddMonster { name } => add_monster(state, name),
            Self::UpdateMonster { id, update } => update_monster(state, id, update),
            Self::RemoveMonster { id } => remove_monster(state, id),
            Self::AddSpell { name } => add_spell(state, name),
            Self::ToggleSpell { id } => toggle_spell(state, id),
            Self::RemoveSpell { id } => remove_spell(state, id),
            Self::Reset => GameState::default(),
        }
    }

    /// The cue to play once this mutation has changed the sheet.
    pub fn cue(&self) -> Cue {
        match self {
            Self::SetText {
                field: TextField::Gold,
                ..
            } => Cue::Gold,
            Self::ConsumeProvision => Cue::Luck,
            Self::RemoveMonster { .. } | Self::RemoveSpell { .. } | Self::Reset => Cue::Delete,
            Self::AdjustAttribute { .. }
            | Self::SetText { .. }
            | Self::AdjustProvisions { .. }
            | Self::AddMonster { .. }
            | Self::UpdateMonster { .. }
            | Self::AddSpell { .. }
            | Self::ToggleSpell { .. } => Cue::Write,
        }
    }
}

/// `state[attribute][field] = max(0, value + delta)`.
pub fn adjust_attribute(
    state: &GameState,
    attribute: AttributeKind,
    field: AttributeField,
    delta: i64,
) -> GameState {
    let mut next = state.clone();
    let slot = next.attribute_mut(attribute);
    *slot = slot.adjusted(field, delta);
    next
}

/// Replace a text field verbatim.
pub fn set_text(state: &GameState, field: TextField, value: &str) -> GameState {
    let mut next = state.clone();
    value.clone_into(next.text_mut(field));
    next
}

/// Eat one provision, restoring stamina up to (never past) its baseline.
///
/// Does nothing when no provisions are left.
pub fn consume_provision(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.provisions == 0 {
        return next;
    }
    next.provisions -= 1;
    let restored = next.stamina.current.saturating_add(PROVISION_STAMINA);
    next.stamina.current = restored.min(next.stamina.initial);
    next
}

/// `provisions = max(0, provisions + delta)`.
pub fn adjust_provisions(state: &GameState, delta: i64) -> GameState {
    let mut next = state.clone();
    next.provisions = apply_delta(next.provisions, delta);
    next
}

/// Append a zeroed monster; blank names are ignored.
pub fn add_monster(state: &GameState, name: &str) -> GameState {
    let mut next = state.clone();
    if name.trim().is_empty() {
        return next;
    }
    next.monsters.push(Monster::new(name));
    next
}

/// Apply `update` to the monster with `id`, if any.
pub fn update_monster(state: &GameState, id: &str, update: &MonsterUpdate) -> GameState {
    let mut next = state.clone();
    if let Some(monster) = next.monsters.iter_mut().find(|m| m.id == id) {
        *monster = update.apply_to(monster);
    }
    next
}

/// Remove the monster with `id`, if any.
pub fn remove_monster(state: &GameState, id: &str) -> GameState {
    let mut next = state.clone();
    next.monsters.retain(|m| m.id != id);
    next
}

/// Append an unused spell; blank names are ignored.
pub fn add_spell(state: &GameState, name: &str) -> GameState {
    let mut next = state.clone();
    if name.trim().is_empty() {
        return next;
    }
    next.spells.push(Spell::new(name));
    next
}

/// Flip the used flag of the spell with `id`, if any.
pub fn toggle_spell(state: &GameState, id: &str) -> GameState {
    let mut next = state.clone();
    if let Some(spell) = next.spells.iter_mut().find(|s| s.id == id) {
        spell.used = !spell.used;
    }
    next
}

/// Remove the spell with `id`, if any.
pub fn remove_spell(state: &GameState, id: &str) -> GameState {
    let mut next = state.clone();
    next.spells.retain(|s| s.id != id);
    next
}
