//! Attributes (skill, stamina, luck).
//!
//! An attribute is a current/initial pair floored at zero. There is no
//! ceiling: a potion may legitimately push `current` above `initial`.

use serde::{Deserialize, Serialize};

/// A game statistic with a live value and an editable baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Live value.
    pub current: u32,
    /// Baseline rolled at character creation.
    pub initial: u32,
}

/// Which half of an attribute an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeField {
    /// The live value.
    Current,
    /// The baseline.
    Initial,
}

impl Attribute {
    /// Create an attribute with both halves set.
    pub fn new(current: u32, initial: u32) -> Self {
        Self { current, initial }
    }

    /// Read one half of the attribute.
    pub fn get(&self, field: AttributeField) -> u32 {
        match field {
            AttributeField::Current => self.current,
            AttributeField::Initial => self.initial,
        }
    }

    /// Return a copy with `field` moved by `delta`, floored at zero.
    pub fn adjusted(self, field: AttributeField, delta: i64) -> Self {
        let value = apply_delta(self.get(field), delta);
        match field {
            AttributeField::Current => Self {
                current: value,
                ..self
            },
            AttributeField::Initial => Self {
                initial: value,
                ..self
            },
        }
    }

    /// Fraction of the baseline still available, clamped to 0.0..=1.0.
    ///
    /// A zero baseline is treated as 1 so a fresh sheet reads as empty
    /// rather than dividing by zero.
    pub fn fraction(&self) -> f64 {
        let baseline = self.initial.max(1) as f64;
        (self.current as f64 / baseline).clamp(0.0, 1.0)
    }
}

/// Add a signed delta to an unsigned value, flooring at zero.
///
/// Values never exceed `u32::MAX`; a delta that would overflow saturates.
pub fn apply_delta(value: u32, delta: i64) -> u32 {
    let next = i64::from(value).saturating_add(delta);
    next.clamp(0, i64::from(u32::MAX)) as u32
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.initial)
    }
}
