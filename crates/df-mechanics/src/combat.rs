//! The flat damage formula and death saves.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::DualRoll;

/// Weapon damage used when the attacker has nothing better.
pub const DEFAULT_WEAPON_DAMAGE: i32 = 6;

/// Damage dealt by a single hit: weapon + strength − armor, floored at 1.
///
/// A hit always costs at least one point, no matter how heavy the armor
/// or how feeble the attacker.
pub fn calculate_damage(attacker_strength: i32, armor_score: i32, weapon_damage: i32) -> u32 {
    (weapon_damage + attacker_strength - armor_score).max(1) as u32
}

/// The result of a death save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathSave {
    /// Hope die face.
    pub hope_roll: u32,
    /// Fear die face.
    pub fear_roll: u32,
    /// Whether the character stabilizes.
    pub stabilized: bool,
}

/// Roll a death save for a character at 0 hit points.
///
/// Returns `None` when hit points remain. Stabilizing requires the hope
/// die to beat the fear die strictly: a tie fails here, unlike the
/// critical-tie rule in resolution. That asymmetry is part of the rules
/// text, not an accident.
pub fn check_death_save(current_hit_points: u32, rng: &mut StdRng) -> Option<DeathSave> {
    if current_hit_points > 0 {
        return None;
    }
    let roll = DualRoll::roll(rng);
    Some(DeathSave {
        hope_roll: roll.hope(),
        fear_roll: roll.fear(),
        stabilized: roll.hope() > roll.fear(),
    })
}
