//! Player characters: classes, ancestries, attributes, and resource state.
//!
//! A character's attribute block is computed once at creation from its
//! class baseline plus ancestry modifiers, and is freely mutable after
//! that. Hope and Fear live in clamped pools; hit points start full at
//! the class maximum.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::pool::Pool;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The platform user who owns a character or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character class. Fixed set; each carries a stat baseline, a hit-point
/// maximum, and starting abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Front-line fighter. Highest strength baseline.
    Warrior,
    /// Wilderness scout with keen instincts.
    Ranger,
    /// Devoted protector. Toughest hit-point maximum.
    Guardian,
    /// Bearer of divine power.
    Seraph,
    /// Innate spellcaster.
    Sorcerer,
    /// Scholarly spellcaster. Highest knowledge, fewest hit points.
    Wizard,
}

impl CharacterClass {
    /// All classes, in display order.
    pub const ALL: [Self; 6] = [
        Self::Warrior,
        Self::Ranger,
        Self::Guardian,
        Self::Seraph,
        Self::Sorcerer,
        Self::Wizard,
    ];

    /// Parse a class name, case-insensitively.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(Self::Warrior),
            "ranger" => Ok(Self::Ranger),
            "guardian" => Ok(Self::Guardian),
            "seraph" => Ok(Self::Seraph),
            "sorcerer" => Ok(Self::Sorcerer),
            "wizard" => Ok(Self::Wizard),
            other => Err(CoreError::UnknownClass(other.to_string())),
        }
    }

    /// Attribute baseline: agility, strength, finesse, instinct,
    /// presence, knowledge.
    pub fn base_attributes(self) -> Attributes {
        match self {
            Self::Warrior => Attributes::new(1, 2, 0, 1, 0, 0),
            Self::Ranger => Attributes::new(2, 1, 1, 2, 0, 0),
            Self::Guardian => Attributes::new(0, 1, 0, 1, 2, 1),
            Self::Seraph => Attributes::new(1, 0, 1, 0, 2, 1),
            Self::Sorcerer => Attributes::new(0, 0, 1, 1, 1, 2),
            Self::Wizard => Attributes::new(0, 0, 1, 0, 1, 3),
        }
    }

    /// Hit-point maximum for a fresh character of this class.
    pub fn hit_point_max(self) -> u32 {
        match self {
            Self::Warrior => 25,
            Self::Ranger => 22,
            Self::Guardian => 28,
            Self::Seraph => 20,
            Self::Sorcerer => 18,
            Self::Wizard => 16,
        }
    }

    /// Abilities granted at creation.
    pub fn starting_abilities(self) -> &'static [&'static str] {
        match self {
            Self::Warrior => &["Combat Mastery", "Weapon Training"],
            Self::Ranger => &["Nature's Bond", "Tracking"],
            Self::Guardian => &["Divine Protection", "Healing Touch"],
            Self::Seraph => &["Divine Magic", "Sacred Light"],
            Self::Sorcerer => &["Arcane Power", "Spell Weaving"],
            Self::Wizard => &["Arcane Studies", "Spell Preparation"],
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warrior => write!(f, "warrior"),
            Self::Ranger => write!(f, "ranger"),
            Self::Guardian => write!(f, "guardian"),
            Self::Seraph => write!(f, "seraph"),
            Self::Sorcerer => write!(f, "sorcerer"),
            Self::Wizard => write!(f, "wizard"),
        }
    }
}

/// Character ancestry. Fixed set; each carries attribute modifiers and a
/// bonus ability applied on top of the class baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ancestry {
    /// Adaptable generalists.
    Human,
    /// Graceful and precise.
    Elf,
    /// Stubborn and learned.
    Dwarf,
    /// Small, quick, and lucky.
    Halfling,
    /// Strong and relentless.
    Orc,
}

impl Ancestry {
    /// All ancestries, in display order.
    pub const ALL: [Self; 5] = [
        Self::Human,
        Self::Elf,
        Self::Dwarf,
        Self::Halfling,
        Self::Orc,
    ];

    /// Parse an ancestry name, case-insensitively.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "elf" => Ok(Self::Elf),
            "dwarf" => Ok(Self::Dwarf),
            "halfling" => Ok(Self::Halfling),
            "orc" => Ok(Self::Orc),
            other => Err(CoreError::UnknownAncestry(other.to_string())),
        }
    }

    /// Attribute modifiers added to the class baseline.
    pub fn attribute_modifiers(self) -> Attributes {
        match self {
            Self::Human => Attributes::new(0, 0, 0, 0, 1, 0),
            Self::Elf => Attributes::new(1, 0, 1, 0, 0, 0),
            Self::Dwarf => Attributes::new(0, 1, 0, 0, 0, 1),
            Self::Halfling => Attributes::new(1, 0, 1, 1, 0, 0),
            Self::Orc => Attributes::new(0, 2, 0, 1, 0, 0),
        }
    }

    /// Bonus ability granted at creation.
    pub fn starting_ability(self) -> &'static str {
        match self {
            Self::Human => "Adaptability",
            Self::Elf => "Elven Grace",
            Self::Dwarf => "Dwarven Resilience",
            Self::Halfling => "Lucky",
            Self::Orc => "Orcish Fury",
        }
    }
}

impl fmt::Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Elf => write!(f, "elf"),
            Self::Dwarf => write!(f, "dwarf"),
            Self::Halfling => write!(f, "halfling"),
            Self::Orc => write!(f, "orc"),
        }
    }
}

/// The six-attribute block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Speed, reflexes, balance.
    pub agility: i32,
    /// Raw physical power.
    pub strength: i32,
    /// Precision and fine control.
    pub finesse: i32,
    /// Awareness and gut feeling.
    pub instinct: i32,
    /// Force of personality.
    pub presence: i32,
    /// Learning and recall.
    pub knowledge: i32,
}

impl Attributes {
    /// Build an attribute block in declaration order.
    pub fn new(
        agility: i32,
        strength: i32,
        finesse: i32,
        instinct: i32,
        presence: i32,
        knowledge: i32,
    ) -> Self {
        Self {
            agility,
            strength,
            finesse,
            instinct,
            presence,
            knowledge,
        }
    }

    /// Component-wise sum.
    pub fn plus(self, other: Self) -> Self {
        Self {
            agility: self.agility + other.agility,
            strength: self.strength + other.strength,
            finesse: self.finesse + other.finesse,
            instinct: self.instinct + other.instinct,
            presence: self.presence + other.presence,
            knowledge: self.knowledge + other.knowledge,
        }
    }
}

/// Starting Hope for a fresh character.
pub const STARTING_HOPE: u32 = 5;
/// Starting Fear for a fresh character.
pub const STARTING_FEAR: u32 = 3;

/// A player character.
///
/// Characters are value snapshots: the store hands out owned copies and
/// accepts updated copies back. At most one character per user is active
/// at a time; superseded characters are deactivated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier.
    pub id: CharacterId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Class tag.
    pub class: CharacterClass,
    /// Ancestry tag.
    pub ancestry: Ancestry,
    /// Hope pool, 0..=10.
    pub hope: Pool,
    /// Fear pool, 0..=10.
    pub fear: Pool,
    /// Attribute block (class baseline + ancestry modifiers at creation).
    pub attributes: Attributes,
    /// Flat damage reduction.
    pub armor_score: i32,
    /// Hit points, 0..=class maximum.
    pub hit_points: Pool,
    /// Accumulated stress.
    pub stress: i32,
    /// Ability tags. Seeded from class and ancestry grants.
    pub abilities: Vec<String>,
    /// Carried equipment tags.
    pub equipment: Vec<String>,
    /// Known spell tags.
    pub spells: Vec<String>,
    /// Exactly one active character per user at any time.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Create a fresh, active character with derived stats.
    pub fn new(user_id: UserId, name: impl Into<String>, class: CharacterClass, ancestry: Ancestry) -> Self {
        let now = Utc::now();
        let mut abilities: Vec<String> = class
            .starting_abilities()
            .iter()
            .map(|a| (*a).to_string())
            .collect();
        abilities.push(ancestry.starting_ability().to_string());

        Self {
            id: CharacterId::new(),
            user_id,
            name: name.into(),
            class,
            ancestry,
            hope: Pool::resource(STARTING_HOPE),
            fear: Pool::resource(STARTING_FEAR),
            attributes: class.base_attributes().plus(ancestry.attribute_modifiers()),
            armor_score: 0,
            hit_points: Pool::full(class.hit_point_max()),
            stress: 0,
            abilities,
            equipment: Vec::new(),
            spells: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// True once hit points reach 0.
    pub fn is_dying(&self) -> bool {
        self.hit_points.is_empty()
    }

    /// Stamp `updated_at`. Call after any field mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
