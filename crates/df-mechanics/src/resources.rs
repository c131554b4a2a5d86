//! Hope/Fear pool updates driven by roll outcomes.
//!
//! Successes feed Hope, failures feed Fear, criticals feed double, and
//! the dominant die can add one more when it agrees with the verdict.
//! Pools clamp to 0..=10 as the final step, each independently.

use df_core::pool::{Pool, RESOURCE_POOL_MAX};

use crate::dice::DominantDie;
use crate::outcome::RollOutcome;

/// The Hope and Fear gains earned by a single outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceDelta {
    /// Points added to the Hope pool.
    pub hope: u32,
    /// Points added to the Fear pool.
    pub fear: u32,
}

/// Compute the pool gains for an outcome.
///
/// Exactly one base branch fires, checked in fixed order: critical
/// success, success, critical failure, plain failure. The dominant-die
/// bonus stacks on top when the higher die agrees with the verdict.
pub fn outcome_delta(outcome: &RollOutcome) -> ResourceDelta {
    let mut delta = ResourceDelta::default();

    if outcome.critical_success {
        delta.hope += 2;
    } else if outcome.success {
        delta.hope += 1;
    } else if outcome.critical_failure {
        delta.fear += 2;
    } else {
        delta.fear += 1;
    }

    if outcome.dominant == DominantDie::Hope && outcome.success {
        delta.hope += 1;
    }
    if outcome.dominant == DominantDie::Fear && !outcome.success {
        delta.fear += 1;
    }

    delta
}

/// Apply an outcome to raw pool values, returning the new (hope, fear).
///
/// Both results are clamped to 0..=10 regardless of the inputs; neither
/// pool's clamp affects the other.
pub fn apply_outcome(hope: u32, fear: u32, outcome: &RollOutcome) -> (u32, u32) {
    let delta = outcome_delta(outcome);
    (
        (hope.min(RESOURCE_POOL_MAX) + delta.hope).min(RESOURCE_POOL_MAX),
        (fear.min(RESOURCE_POOL_MAX) + delta.fear).min(RESOURCE_POOL_MAX),
    )
}

/// Apply an outcome directly to a character's pools.
pub fn apply_outcome_to_pools(hope: &mut Pool, fear: &mut Pool, outcome: &RollOutcome) {
    let delta = outcome_delta(outcome);
    hope.gain(delta.hope);
    fear.gain(delta.fear);
}
