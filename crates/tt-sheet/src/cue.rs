//! Audio and haptic cues.
//!
//! The store tags each committed change with a [`Cue`] and hands it to every
//! registered [`CueSink`]. Sinks cannot fail the mutation that produced the
//! cue and nothing waits on them.

use serde::{Deserialize, Serialize};

/// A fire-and-forget feedback tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Dice were thrown.
    Dice,
    /// A value on the sheet was written.
    Write,
    /// The gold field changed.
    Gold,
    /// Luck was tested or a provision eaten.
    Luck,
    /// Something was removed or the sheet was reset.
    Delete,
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dice => write!(f, "dice"),
            Self::Write => write!(f, "write"),
            Self::Gold => write!(f, "gold"),
            Self::Luck => write!(f, "luck"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Receives cues. Implementations must return promptly.
pub trait CueSink {
    /// Render the cue.
    fn cue(&self, cue: Cue);
}

impl<F: Fn(Cue)> CueSink for F {
    fn cue(&self, cue: Cue) {
        self(cue)
    }
}
