//! Scene transitions driven by player action text.
//!
//! Scene state is flat: the current scene is just a label, any label may
//! follow any other, and nothing validates reachability. A transition
//! fires when the action contains a travel keyword; the destination is
//! picked by the first matching location row, with a catch-all for
//! places the table does not know.

use serde::{Deserialize, Serialize};

/// A known destination, plus a catch-all for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    /// The tavern.
    Tavern,
    /// The dark forest.
    DarkForest,
    /// The town square.
    TownSquare,
    /// The dungeon.
    Dungeon,
    /// The ancient temple.
    AncientTemple,
    /// A destination the table does not know.
    NewLocation,
}

impl Scene {
    /// Display label stored in a session's `current_scene`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tavern => "The Tavern",
            Self::DarkForest => "Dark Forest",
            Self::TownSquare => "Town Square",
            Self::Dungeon => "Dungeon",
            Self::AncientTemple => "Ancient Temple",
            Self::NewLocation => "New Location",
        }
    }

    /// Stable key for game-state blobs.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Tavern => "tavern",
            Self::DarkForest => "dark_forest",
            Self::TownSquare => "town_square",
            Self::Dungeon => "dungeon",
            Self::AncientTemple => "ancient_temple",
            Self::NewLocation => "new_location",
        }
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Words that signal the player is going somewhere.
const TRANSITION_KEYWORDS: &[&str] = &[
    "вход", "выход", "направл", "идти к", "enter", "exit", "head toward", "go to",
];

/// Destination table, checked top to bottom; first match wins.
const SCENE_RULES: &[(Scene, &[&str])] = &[
    (Scene::Tavern, &["таверн", "tavern", "inn"]),
    (Scene::DarkForest, &["лес", "forest", "woods"]),
    (Scene::TownSquare, &["город", "town", "city", "square"]),
    (Scene::Dungeon, &["подземель", "пещер", "dungeon", "cave"]),
    (Scene::AncientTemple, &["храм", "temple", "shrine"]),
];

/// Detect a scene transition in a player action.
///
/// Independent of intent classification: an action can both classify
/// (e.g. movement) and change the scene. Returns `None` when the text
/// contains no travel keyword.
pub fn detect_scene_change(text: &str) -> Option<Scene> {
    let lower = text.to_lowercase();
    if !TRANSITION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return None;
    }
    for (scene, keywords) in SCENE_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Some(*scene);
        }
    }
    Some(Scene::NewLocation)
}
