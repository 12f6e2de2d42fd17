//! Dice and resolution rules for the Templo adventure sheet.
//!
//! Everything in the gamebook is resolved with six-sided dice: the free
//! roller throws one or two of them, attack strength is two dice plus
//! skill, and testing luck is a two-dice roll-under check. Randomness is
//! always supplied by the caller so results can be reproduced from a seed.

pub mod dice;
pub mod resolution;

pub use dice::{D6_SIDES, DiceCount, DicePool, RollResult};
pub use resolution::{AttackStrength, Outcome, RollUnder};
