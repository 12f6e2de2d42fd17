//! Interpreting dice rolls.
//!
//! - **Attack strength**: two dice plus the current skill score
//! - **Roll under**: two dice at or below a target (testing luck)

pub mod attack;
pub mod roll_under;

pub use attack::AttackStrength;
pub use roll_under::RollUnder;

use serde::{Deserialize, Serialize};

/// The outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The roll met the target.
    Success {
        /// How far under the target the roll was.
        margin: u32,
    },
    /// The roll exceeded the target.
    Failure,
}

impl Outcome {
    /// Returns true for any success.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { margin } => write!(f, "Success (margin {margin})"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        assert_eq!(
            Outcome::Success { margin: 1 }.to_string(),
            "Success (margin 1)"
        );
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }

    #[test]
    fn outcome_is_success() {
        assert!(Outcome::Success { margin: 0 }.is_success());
        assert!(!Outcome::Failure.is_success());
    }
}
