//! Prompt construction for the narrative generator.
//!
//! Prompts carry a compact character-state header so the generator can
//! keep its prose consistent with the sheet. The builders here cover the
//! three moments the engine narrates: the opening scene, an action in
//! flight, and a resolved roll.

use serde::{Deserialize, Serialize};

use df_core::{Ancestry, Character, CharacterClass};
use df_mechanics::RollOutcome;

/// A snapshot of character state rendered into every prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Display name.
    pub name: String,
    /// Class tag.
    pub class: CharacterClass,
    /// Ancestry tag.
    pub ancestry: Ancestry,
    /// Current Hope.
    pub hope: u32,
    /// Current Fear.
    pub fear: u32,
    /// Current hit points.
    pub hit_points: u32,
    /// Hit-point maximum.
    pub hit_points_max: u32,
}

impl From<&Character> for CharacterSummary {
    fn from(c: &Character) -> Self {
        Self {
            name: c.name.clone(),
            class: c.class,
            ancestry: c.ancestry,
            hope: c.hope.current(),
            fear: c.fear.current(),
            hit_points: c.hit_points.current(),
            hit_points_max: c.hit_points.max(),
        }
    }
}

impl std::fmt::Display for CharacterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Character: {}", self.name)?;
        writeln!(f, "Class: {}", self.class)?;
        writeln!(f, "Ancestry: {}", self.ancestry)?;
        writeln!(f, "Hope: {}/10", self.hope)?;
        writeln!(f, "Fear: {}/10", self.fear)?;
        write!(f, "Health: {}/{}", self.hit_points, self.hit_points_max)
    }
}

/// A request to the narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativePrompt {
    /// The ask itself.
    pub text: String,
    /// Character state rendered above the ask.
    pub character: CharacterSummary,
}

impl NarrativePrompt {
    /// The full prompt text sent to the generator.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.character, self.text)
    }
}

/// One-line class introduction used in the opening prompt.
fn class_intro(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Warrior => {
            "You are a seasoned warrior whose strength and skill at arms are known across many lands."
        }
        CharacterClass::Ranger => {
            "You are a ranger who knows the secrets of the wild and can survive its harshest reaches."
        }
        CharacterClass::Guardian => {
            "You are a guardian, sworn to higher powers and to the protection of the innocent."
        }
        CharacterClass::Seraph => {
            "You are a seraph, a bearer of divine power and light in this world."
        }
        CharacterClass::Sorcerer => {
            "You are a sorcerer; raw magic runs in your veins, straining to break free."
        }
        CharacterClass::Wizard => {
            "You are a wizard who has mastered the arcane through long years of study and practice."
        }
    }
}

/// One-line ancestry flavor used in the opening prompt.
fn ancestry_flavor(ancestry: Ancestry) -> &'static str {
    match ancestry {
        Ancestry::Human => "Human resourcefulness and adaptability serve you in any situation.",
        Ancestry::Elf => "Elven grace and a bond with the natural world give you an edge.",
        Ancestry::Dwarf => {
            "Dwarven endurance and craft-knowledge make you a dependable companion."
        }
        Ancestry::Halfling => {
            "Halfling luck and good cheer lift the spirits of everyone around you."
        }
        Ancestry::Orc => "Orcish strength and resolve carry you over any obstacle.",
    }
}

/// Prompt for the opening scene of a fresh session.
pub fn opening_prompt(character: &Character) -> NarrativePrompt {
    let text = format!(
        "{intro} {flavor}\n\n\
         Your name is {name}, and you stand at the threshold of a new adventure. \
         Set the opening scene for this character, describe the situation, and \
         offer a few possible courses of action.",
        intro = class_intro(character.class),
        flavor = ancestry_flavor(character.ancestry),
        name = character.name,
    );
    NarrativePrompt {
        text,
        character: character.into(),
    }
}

/// Prompt for narrating a player action before any dice hit the table.
pub fn action_prompt(character: &Character, action: &str, description: &str) -> NarrativePrompt {
    let mut text = format!("{} attempts: {action}\n", character.name);
    if !description.is_empty() {
        text.push_str(&format!("Details: {description}\n"));
    }
    text.push_str(
        "\nDescribe how this unfolds and what obstacles or openings appear. \
         If a dice roll is called for, hint at it in the narration.",
    );
    NarrativePrompt {
        text,
        character: character.into(),
    }
}

/// Prompt for narrating a resolved roll, including how the pools moved.
pub fn roll_prompt(
    character: &Character,
    outcome: &RollOutcome,
    hope_before: u32,
    fear_before: u32,
) -> NarrativePrompt {
    let summary: CharacterSummary = character.into();
    let text = format!(
        "{name} just acted on a roll.\n\n\
         Roll result: {desc}\n\
         Hope moved from {hope_before} to {hope_now}; Fear moved from {fear_before} to {fear_now}.\n\n\
         Describe what happens, covering whether it went well, how the \
         character's state shifted, and what comes next.",
        name = character.name,
        desc = outcome.description,
        hope_now = summary.hope,
        fear_now = summary.fear,
    );
    NarrativePrompt {
        text,
        character: summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_core::UserId;
    use df_mechanics::{DualRoll, resolve};

    fn test_character() -> Character {
        Character::new(
            UserId(1),
            "Kael",
            CharacterClass::Warrior,
            Ancestry::Orc,
        )
    }

    #[test]
    fn summary_reflects_character() {
        let c = test_character();
        let s = CharacterSummary::from(&c);
        assert_eq!(s.name, "Kael");
        assert_eq!(s.hope, 5);
        assert_eq!(s.fear, 3);
        assert_eq!(s.hit_points_max, 25);
    }

    #[test]
    fn render_puts_state_header_first() {
        let c = test_character();
        let p = opening_prompt(&c);
        let rendered = p.render();
        assert!(rendered.starts_with("Character: Kael"));
        assert!(rendered.contains("Hope: 5/10"));
        assert!(rendered.contains("Health: 25/25"));
    }

    #[test]
    fn opening_prompt_mentions_class_and_name() {
        let p = opening_prompt(&test_character());
        assert!(p.text.contains("seasoned warrior"));
        assert!(p.text.contains("Orcish strength"));
        assert!(p.text.contains("Your name is Kael"));
    }

    #[test]
    fn action_prompt_includes_optional_description() {
        let c = test_character();
        let with = action_prompt(&c, "climb the wall", "using the old rope");
        assert!(with.text.contains("climb the wall"));
        assert!(with.text.contains("Details: using the old rope"));

        let without = action_prompt(&c, "climb the wall", "");
        assert!(!without.text.contains("Details:"));
    }

    #[test]
    fn roll_prompt_tracks_pool_movement() {
        let mut c = test_character();
        let outcome = resolve(DualRoll::new(11, 3).unwrap(), 10, 0);
        c.hope.gain(2);
        let p = roll_prompt(&c, &outcome, 5, 3);
        assert!(p.text.contains("Hope moved from 5 to 7"));
        assert!(p.text.contains(&outcome.description));
    }
}
