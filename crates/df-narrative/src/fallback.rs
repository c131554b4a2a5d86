//! Fixed fallback lines for when the generator is down.
//!
//! Generation failures never reach the player. The engine swaps in one
//! of these lines and the story keeps moving; rotation keeps repeated
//! failures from reading identically.

use crate::error::NarrativeResult;
use crate::prompt::NarrativePrompt;
use crate::Narrator;

/// The fixed fallback lines, in rotation order.
pub const FALLBACK_LINES: [&str; 4] = [
    "You press on, sensing that the world around you is full of secrets and possibility. What will you do next?",
    "The world seems to hold its breath, waiting for your next move. The adventure continues!",
    "Your hero's road is only beginning. Great deeds and trials lie ahead.",
    "The magic of this world stirs at your presence. Time to act!",
];

/// Pick a fallback line by rotation index.
pub fn fallback_line(index: usize) -> &'static str {
    FALLBACK_LINES[index % FALLBACK_LINES.len()]
}

/// Run a narrator, substituting a fallback line on any failure.
///
/// `attempt` drives the rotation so consecutive failures vary.
pub fn narrate_or_fallback(
    narrator: &mut dyn Narrator,
    prompt: &NarrativePrompt,
    attempt: usize,
) -> String {
    narrator
        .generate(prompt)
        .unwrap_or_else(|_| fallback_line(attempt).to_string())
}

/// A narrator that never calls out anywhere: it answers every prompt
/// with the next fallback line. Doubles as the offline default and as a
/// deterministic stub in tests.
#[derive(Debug, Default)]
pub struct FallbackNarrator {
    served: usize,
}

impl FallbackNarrator {
    /// Create a fresh rotation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Narrator for FallbackNarrator {
    fn generate(&mut self, _prompt: &NarrativePrompt) -> NarrativeResult<String> {
        let line = fallback_line(self.served);
        self.served += 1;
        Ok(line.to_string())
    }
}
