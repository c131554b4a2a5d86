//! Narrative generation for Duskfall.
//!
//! The engine treats prose generation as an opaque, replaceable
//! collaborator behind the [`Narrator`] trait: hand it a prompt with a
//! character-state header, get text back, and if it fails, substitute a
//! fixed fallback line. An LLM-backed implementation lives with
//! whatever service embeds the engine; this crate ships the prompt
//! builders, the fallback machinery, and an offline default.

pub mod error;
pub mod fallback;
pub mod prompt;

pub use error::{NarrativeError, NarrativeResult};
pub use fallback::{FALLBACK_LINES, FallbackNarrator, fallback_line, narrate_or_fallback};
pub use prompt::{
    CharacterSummary, NarrativePrompt, action_prompt, opening_prompt, roll_prompt,
};

/// An opaque prose generator. May fail or time out; callers substitute
/// fallback text rather than surfacing errors to the player.
pub trait Narrator {
    /// Generate prose for a prompt.
    fn generate(&mut self, prompt: &NarrativePrompt) -> NarrativeResult<String>;
}
