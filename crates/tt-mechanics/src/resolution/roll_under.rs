//! Roll-under resolution.
//!
//! Roll two dice and succeed if the total is at or below a target number.
//! Testing luck uses the current luck score as the target.

use serde::{Deserialize, Serialize};

use crate::dice::RollResult;
use crate::resolution::Outcome;

/// Configuration for a roll-under check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollUnder {
    /// The total to roll at or under.
    pub target_number: u32,
}

impl RollUnder {
    /// Create a check against `target_number`.
    pub fn new(target_number: u32) -> Self {
        Self { target_number }
    }

    /// Resolve a roll by comparing its total against the target.
    ///
    /// An empty roll always fails.
    pub fn resolve(&self, roll: &RollResult) -> Outcome {
        let total = roll.total();
        if total == 0 {
            return Outcome::Failure;
        }
        if total <= self.target_number {
            Outcome::Success {
                margin: self.target_number - total,
            }
        } else {
            Outcome::Failure
        }
    }
}
