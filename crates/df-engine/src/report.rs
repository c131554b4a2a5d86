//! Values returned by engine operations.

use df_core::{Character, GameSession, RollRecord};
use df_director::{ActionIntent, Scene};
use df_mechanics::{DeathSave, RollOutcome};

/// Result of starting a session: the fresh session and its opening prose.
#[derive(Debug, Clone)]
pub struct SessionStart {
    /// The newly created, active session.
    pub session: GameSession,
    /// The character being played.
    pub character: Character,
    /// Opening narration (generated or fallback).
    pub narrative: String,
}

/// Result of a free-text action.
#[derive(Debug, Clone)]
pub struct ActionReport {
    /// What the classifier made of the text.
    pub intent: ActionIntent,
    /// Scene transition, when the text asked for one.
    pub scene_change: Option<Scene>,
    /// Narration for the action (generated or fallback).
    pub narrative: String,
    /// Session snapshot after logs and scene were updated.
    pub session: GameSession,
}

/// Result of a resolved dice roll.
#[derive(Debug, Clone)]
pub struct RollReport {
    /// The classified outcome.
    pub outcome: RollOutcome,
    /// Character snapshot after the Hope/Fear update.
    pub character: Character,
    /// The audit record appended to the session history.
    pub record: RollRecord,
    /// Narration for the outcome (generated or fallback).
    pub narrative: String,
}

/// Result of taking a hit.
#[derive(Debug, Clone)]
pub struct DamageReport {
    /// Damage dealt after armor, at least 1.
    pub damage: u32,
    /// Character snapshot after the hit.
    pub character: Character,
    /// Death save, rolled only when hit points reached 0.
    pub death_save: Option<DeathSave>,
}
