//! Dice-driven resolutions: attack strength, testing luck and the free
//! dice roller.
//!
//! Results are transient. Nothing here is stored on the sheet except the
//! luck point a luck test costs.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tt_mechanics::{AttackStrength, DiceCount, DicePool, RollResult, RollUnder};

use crate::model::{AttributeField, AttributeKind, GameState};
use crate::mutation::adjust_attribute;

/// How long an attack strength stays on screen.
pub const ATTACK_RESULT_TTL: Duration = Duration::from_secs(4);

/// How long a luck test result stays on screen.
pub const LUCK_RESULT_TTL: Duration = Duration::from_secs(3);

/// The result of testing luck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckTest {
    /// The two dice as drawn.
    pub dice: RollResult,
    /// Sum of the dice (2 to 12).
    pub roll: u32,
    /// Whether the roll was at or under the luck score.
    pub success: bool,
}

impl LuckTest {
    /// Judge `dice` against a luck score.
    pub fn from_roll(dice: RollResult, luck_current: u32) -> Self {
        let roll = dice.total();
        let success = RollUnder::new(luck_current).resolve(&dice).is_success();
        Self {
            dice,
            roll,
            success,
        }
    }
}

/// Roll attack strength for the given skill. The sheet is not touched.
pub fn resolve_attack<R: Rng + ?Sized>(rng: &mut R, skill_current: u32) -> AttackStrength {
    AttackStrength::roll(rng, skill_current)
}

/// Test luck: roll two dice against `luck.current`, then spend one luck
/// point whatever the outcome.
pub fn resolve_luck_test<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> (GameState, LuckTest) {
    let dice = DicePool::new().with_dice(2).roll(rng);
    apply_luck_test(state, dice)
}

/// Test luck with dice that have already been rolled.
pub fn apply_luck_test(state: &GameState, dice: RollResult) -> (GameState, LuckTest) {
    let test = LuckTest::from_roll(dice, state.luck.current);
    let next = adjust_attribute(state, AttributeKind::Luck, AttributeField::Current, -1);
    (next, test)
}

/// Throw one or two dice, returned in draw order.
pub fn roll_dice<R: Rng + ?Sized>(count: DiceCount, rng: &mut R) -> RollResult {
    count.pool().roll(rng)
}
