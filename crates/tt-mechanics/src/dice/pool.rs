//! Dice pool construction and rolling.

use rand::Rng;

use super::D6_SIDES;
use super::roll::RollResult;

/// A number of six-sided dice to be rolled together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DicePool {
    count: u32,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Add `count` six-sided dice.
    pub fn with_dice(mut self, count: u32) -> Self {
        self.count += count;
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Roll every die in the pool, in order, using the given RNG.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollResult {
        let values = (0..self.count)
            .map(|_| rng.random_range(1..=D6_SIDES))
            .collect();
        RollResult::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().with_dice(1).with_dice(1);
        assert_eq!(pool.count(), 2);
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = DicePool::new().with_dice(50).roll(&mut rng);
        assert_eq!(result.count(), 50);
        assert!(result.values().iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new().with_dice(2);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(pool.roll(&mut rng1), pool.roll(&mut rng2));
    }

    #[test]
    fn empty_pool_rolls_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = DicePool::new().roll(&mut rng);
        assert_eq!(result.count(), 0);
        assert_eq!(result.total(), 0);
    }
}
