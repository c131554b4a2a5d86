//! Action-intent classification and scene direction for Duskfall.
//!
//! Two independent passes over the same player text: [`classify_action`]
//! decides whether the action needs a roll and at what difficulty, and
//! [`detect_scene_change`] decides whether the action moves the player
//! somewhere. Both are pure lookups over declarative keyword tables and
//! have no failure modes; unmatched text is an answer, not an error.

pub mod intent;
pub mod scene;

pub use intent::{ActionCategory, ActionIntent, classify_action};
pub use scene::{Scene, detect_scene_change};
