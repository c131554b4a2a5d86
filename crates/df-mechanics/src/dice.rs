//! The dual d12: one Hope die, one Fear die, rolled together.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Faces on each of the two dice.
pub const DIE_SIDES: u32 = 12;

/// Which die showed the higher face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantDie {
    /// The Hope die was higher.
    Hope,
    /// The Fear die was higher.
    Fear,
    /// Both dice showed the same face.
    Tied,
}

impl std::fmt::Display for DominantDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hope => write!(f, "hope"),
            Self::Fear => write!(f, "fear"),
            Self::Tied => write!(f, "tied"),
        }
    }
}

/// A validated pair of d12 faces.
///
/// Construction from raw values goes through [`DualRoll::new`], which
/// rejects anything outside 1..=12. There is no clamping path: an
/// out-of-range face is a caller bug, not a playable roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualRoll {
    hope: u32,
    fear: u32,
}

impl DualRoll {
    /// Build a roll from raw faces, rejecting values outside 1..=12.
    pub fn new(hope: u32, fear: u32) -> MechResult<Self> {
        for die in [hope, fear] {
            if !(1..=DIE_SIDES).contains(&die) {
                return Err(MechError::InvalidDie(die));
            }
        }
        Ok(Self { hope, fear })
    }

    /// Roll a fresh pair with the given RNG.
    pub fn roll(rng: &mut StdRng) -> Self {
        Self {
            hope: rng.random_range(1..=DIE_SIDES),
            fear: rng.random_range(1..=DIE_SIDES),
        }
    }

    /// The Hope die face.
    pub fn hope(&self) -> u32 {
        self.hope
    }

    /// The Fear die face.
    pub fn fear(&self) -> u32 {
        self.fear
    }

    /// The higher of the two faces.
    pub fn highest(&self) -> u32 {
        self.hope.max(self.fear)
    }

    /// True when both dice show the same face.
    pub fn is_tied(&self) -> bool {
        self.hope == self.fear
    }

    /// Which die dominates the roll.
    pub fn dominant(&self) -> DominantDie {
        match self.hope.cmp(&self.fear) {
            std::cmp::Ordering::Greater => DominantDie::Hope,
            std::cmp::Ordering::Less => DominantDie::Fear,
            std::cmp::Ordering::Equal => DominantDie::Tied,
        }
    }
}

impl std::fmt::Display for DualRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hope {}, Fear {}", self.hope, self.fear)
    }
}
