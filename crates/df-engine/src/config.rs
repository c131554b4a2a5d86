//! Engine configuration.

use df_mechanics::DEFAULT_DIFFICULTY;

/// Configuration for a [`crate::GameEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible dice.
    pub seed: u64,
    /// Difficulty used when the caller names none.
    pub default_difficulty: i32,
    /// Scene label given to a freshly started session.
    pub opening_scene: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            default_difficulty: DEFAULT_DIFFICULTY,
            opening_scene: "The adventure begins".to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the default difficulty threshold.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Set the opening scene label.
    pub fn with_opening_scene(mut self, scene: impl Into<String>) -> Self {
        self.opening_scene = scene.into();
        self
    }
}
