//! Attack strength: two dice plus the hero's current skill.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, RollResult};

/// A resolved attack strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackStrength {
    /// The two dice as drawn.
    pub dice: RollResult,
    /// Sum of the dice (2 to 12).
    pub roll: u32,
    /// The skill score added to the dice.
    pub skill: u32,
    /// `roll` plus `skill`, saturating.
    pub total: u32,
}

impl AttackStrength {
    /// Roll two dice and add `skill`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, skill: u32) -> Self {
        let dice = DicePool::new().with_dice(2).roll(rng);
        Self::from_roll(dice, skill)
    }

    /// Build an attack strength from an existing roll.
    pub fn from_roll(dice: RollResult, skill: u32) -> Self {
        let roll = dice.total();
        Self {
            dice,
            roll,
            skill,
            total: roll.saturating_add(skill),
        }
    }
}

impl std::fmt::Display for AttackStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} on the dice + {})", self.total, self.roll, self.skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn adds_skill_to_roll() {
        let a = AttackStrength::from_roll(RollResult::from_values(vec![4, 3]), 9);
        assert_eq!(a.roll, 7);
        assert_eq!(a.skill, 9);
        assert_eq!(a.total, 16);
    }

    #[test]
    fn roll_stays_in_two_dice_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = AttackStrength::roll(&mut rng, 10);
            assert_eq!(a.dice.count(), 2);
            assert!((2..=12).contains(&a.roll));
            assert_eq!(a.total, a.roll + 10);
        }
    }

    #[test]
    fn display() {
        let a = AttackStrength::from_roll(RollResult::from_values(vec![6, 6]), 11);
        assert_eq!(a.to_string(), "23 (12 on the dice + 11)");
    }

    #[test]
    fn huge_skill_saturates_but_displays_skill() {
        let a = AttackStrength::from_roll(RollResult::from_values(vec![1, 2]), u32::MAX);
        assert_eq!(a.total, u32::MAX);
        assert_eq!(a.skill, u32::MAX);
        assert_eq!(
            a.to_string(),
            format!("{} (3 on the dice + {})", u32::MAX, u32::MAX)
        );
    }
}
