//! Roll classification: success, criticals, mixed results.
//!
//! The verdict is driven by the higher die plus the modifier. Equal
//! faces are critical and override everything else. A mixed result is a
//! descriptive flag on top of the success flag, set only when the dice
//! split on the difficulty and the modifier dragged the total to the
//! other side of the threshold. A clean `(12, 3)` against difficulty 12
//! is a plain success, not a mixed one.

use serde::{Deserialize, Serialize};

use crate::dice::{DominantDie, DualRoll};

/// The classified result of a resolved dual-die roll.
///
/// Produced by [`resolve`]; immutable and free of side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Hope die face.
    pub hope_die: u32,
    /// Fear die face.
    pub fear_die: u32,
    /// Difficulty the roll was made against.
    pub difficulty: i32,
    /// Flat modifier added to the higher die.
    pub modifier: i32,
    /// Higher die + modifier.
    pub total: i32,
    /// Whether `total` met the difficulty.
    pub success: bool,
    /// Equal faces and success.
    pub critical_success: bool,
    /// Equal faces and failure.
    pub critical_failure: bool,
    /// The dice split on the difficulty and the modifier flipped the
    /// overall verdict away from the clearing die.
    pub mixed: bool,
    /// Which die dominated.
    pub dominant: DominantDie,
    /// Templated one-line description of the result.
    pub description: String,
}

impl RollOutcome {
    /// True for either kind of critical.
    pub fn is_critical(&self) -> bool {
        self.critical_success || self.critical_failure
    }
}

/// Classify a roll against a difficulty threshold.
///
/// `total = max(hope, fear) + modifier`; the roll succeeds when the
/// total meets the difficulty. Equal faces are critical (success or
/// failure by the overall verdict) and are never mixed.
pub fn resolve(roll: DualRoll, difficulty: i32, modifier: i32) -> RollOutcome {
    let total = roll.highest() as i32 + modifier;
    let success = total >= difficulty;

    let critical_success = roll.is_tied() && success;
    let critical_failure = roll.is_tied() && !success;

    // Exactly one die clears the threshold on its own. When that
    // happens the higher die clears, so the roll is only "mixed" if the
    // modifier pulled the overall verdict the other way.
    let hope_clears = (roll.hope() as i32) >= difficulty;
    let fear_clears = (roll.fear() as i32) >= difficulty;
    let mixed = !roll.is_tied() && (hope_clears != fear_clears) && !success;

    let dominant = roll.dominant();
    let description = describe(
        &roll,
        total,
        difficulty,
        success,
        critical_success,
        critical_failure,
        mixed,
    );

    RollOutcome {
        hope_die: roll.hope(),
        fear_die: roll.fear(),
        difficulty,
        modifier,
        total,
        success,
        critical_success,
        critical_failure,
        mixed,
        dominant,
        description,
    }
}

/// Pick the description template by fixed priority. First match wins;
/// templates never combine.
fn describe(
    roll: &DualRoll,
    total: i32,
    difficulty: i32,
    success: bool,
    critical_success: bool,
    critical_failure: bool,
    mixed: bool,
) -> String {
    if critical_success {
        format!(
            "Critical success! Both dice show {}, total {total} against difficulty {difficulty}",
            roll.hope()
        )
    } else if critical_failure {
        format!(
            "Critical failure! Both dice show {}, total {total} against difficulty {difficulty}",
            roll.hope()
        )
    } else if mixed {
        format!("Mixed result: {roll}, total {total} against difficulty {difficulty}")
    } else if success {
        format!("Success! {roll}, total {total} against difficulty {difficulty}")
    } else {
        format!("Failure. {roll}, total {total} against difficulty {difficulty}")
    }
}
