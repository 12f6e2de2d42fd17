//! Dice pools and rolling.
//!
//! The gamebook only ever uses six-sided dice, thrown one or two at a time.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::RollResult;

use serde::{Deserialize, Serialize};

/// Number of faces on every die in the game.
pub const D6_SIDES: u32 = 6;

/// How many dice the free dice roller throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceCount {
    /// A single die (luck or damage checks).
    One,
    /// Two dice (attack strength).
    Two,
}

impl DiceCount {
    /// Returns the number of dice as an integer.
    pub fn get(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Convert a raw count, accepting only 1 or 2.
    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// Build the pool this count describes.
    pub fn pool(self) -> DicePool {
        DicePool::new().with_dice(self.get())
    }
}

impl std::fmt::Display for DiceCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d6", self.get())
    }
}
