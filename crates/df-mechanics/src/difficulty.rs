//! Named difficulty tiers.

use serde::{Deserialize, Serialize};

/// The threshold used when the caller names none.
pub const DEFAULT_DIFFICULTY: i32 = 12;

/// A named difficulty tier with a fixed threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Threshold 6.
    Trivial,
    /// Threshold 9.
    Easy,
    /// Threshold 12.
    #[default]
    Moderate,
    /// Threshold 15.
    Hard,
    /// Threshold 18.
    Extreme,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Trivial,
        Self::Easy,
        Self::Moderate,
        Self::Hard,
        Self::Extreme,
    ];

    /// The numeric threshold for this tier.
    pub fn threshold(self) -> i32 {
        match self {
            Self::Trivial => 6,
            Self::Easy => 9,
            Self::Moderate => 12,
            Self::Hard => 15,
            Self::Extreme => 18,
        }
    }

    /// Parse a tier name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trivial" => Some(Self::Trivial),
            "easy" => Some(Self::Easy),
            "moderate" => Some(Self::Moderate),
            "hard" => Some(Self::Hard),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trivial => write!(f, "trivial"),
            Self::Easy => write!(f, "easy"),
            Self::Moderate => write!(f, "moderate"),
            Self::Hard => write!(f, "hard"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}
