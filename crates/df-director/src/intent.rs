//! Free-text action classification.
//!
//! Player actions arrive as prose, in Russian or English. Classification
//! is case-insensitive substring matching against an ordered table of
//! keyword rows; the first row with a hit wins, so overlap behavior is
//! fixed by declaration order, not by accident. Text that matches no row
//! simply needs no roll; that is a valid result, not an error.

use serde::{Deserialize, Serialize};

/// The category of a classified action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    /// Attacks and fighting.
    Combat,
    /// Searching and examining.
    Investigation,
    /// Spellcasting and ritual work.
    Magic,
    /// Running, jumping, climbing.
    Movement,
    /// Persuasion and negotiation.
    Social,
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combat => write!(f, "combat"),
            Self::Investigation => write!(f, "investigation"),
            Self::Magic => write!(f, "magic"),
            Self::Movement => write!(f, "movement"),
            Self::Social => write!(f, "social"),
        }
    }
}

/// The result of classifying one action string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionIntent {
    /// Matched category, if any.
    pub category: Option<ActionCategory>,
    /// Whether the action calls for a dice roll.
    pub requires_roll: bool,
    /// Difficulty threshold for the roll, when one is required.
    pub difficulty: Option<i32>,
}

impl ActionIntent {
    /// The no-match intent: nothing to roll.
    pub fn none() -> Self {
        Self {
            category: None,
            requires_roll: false,
            difficulty: None,
        }
    }
}

/// One row of the classification table.
struct CategoryRule {
    category: ActionCategory,
    difficulty: i32,
    keywords: &'static [&'static str],
}

/// Classification table, highest priority first. Keywords are stems so
/// they hit inflected forms in both languages ("атакую", "investigating").
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: ActionCategory::Combat,
        difficulty: 12,
        keywords: &["атак", "бой", "удар", "нападен", "attack", "fight", "strike"],
    },
    CategoryRule {
        category: ActionCategory::Investigation,
        difficulty: 10,
        keywords: &["исследов", "поиск", "осмотр", "search", "investigat", "examin"],
    },
    CategoryRule {
        category: ActionCategory::Magic,
        difficulty: 14,
        keywords: &["магия", "заклинан", "колдовств", "cast", "spell", "magic"],
    },
    CategoryRule {
        category: ActionCategory::Movement,
        difficulty: 9,
        keywords: &["перемещ", "движен", "бег", "прыжок", "move", "run", "jump", "climb"],
    },
    CategoryRule {
        category: ActionCategory::Social,
        difficulty: 11,
        keywords: &["общен", "убежден", "перегов", "talk", "persuad", "negotiat"],
    },
];

/// Classify a player action string.
pub fn classify_action(text: &str) -> ActionIntent {
    let lower = text.to_lowercase();
    for rule in CATEGORY_RULES {
        if rule.keywords.iter().any(|k| lower.contains(k)) {
            return ActionIntent {
                category: Some(rule.category),
                requires_roll: true,
                difficulty: Some(rule.difficulty),
            };
        }
    }
    ActionIntent::none()
}
