//! Game sessions: one active playthrough per user.
//!
//! A session tracks the current scene label, an opaque game-state blob,
//! and two append-only histories: the narrative log (concatenated prose)
//! and the action log (timestamped records).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::character::{CharacterId, UserId};

/// Unique identifier for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One entry in a session's action log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    /// What the player did, as recorded by the caller.
    pub entry: String,
    /// When the action happened.
    pub at: DateTime<Utc>,
}

/// An active or finished playthrough for a (user, character) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Stable identifier.
    pub id: SessionId,
    /// Owning user.
    pub user_id: UserId,
    /// The character being played.
    pub character_id: CharacterId,
    /// Exactly one active session per user at any time.
    pub is_active: bool,
    /// Free-form label for the player's current location.
    pub current_scene: String,
    /// Opaque structured state; replaced wholesale on scene changes.
    pub game_state: Value,
    /// Append-only concatenated prose history.
    pub narrative_log: String,
    /// Append-only, timestamped action history.
    pub action_log: Vec<ActionRecord>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Timestamp of the most recent logged action.
    pub last_action_at: DateTime<Utc>,
}

impl GameSession {
    /// Create a fresh, active session with an empty history.
    pub fn new(user_id: UserId, character_id: CharacterId) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            user_id,
            character_id,
            is_active: true,
            current_scene: String::new(),
            game_state: Value::Null,
            narrative_log: String::new(),
            action_log: Vec::new(),
            created_at: now,
            updated_at: now,
            last_action_at: now,
        }
    }

    /// Append prose to the narrative log, separated by a blank line.
    pub fn push_narrative(&mut self, text: &str) {
        if !self.narrative_log.is_empty() {
            self.narrative_log.push_str("\n\n");
        }
        self.narrative_log.push_str(text);
        self.updated_at = Utc::now();
    }

    /// Append a timestamped record to the action log.
    pub fn push_action(&mut self, entry: impl Into<String>) {
        let now = Utc::now();
        self.action_log.push(ActionRecord {
            entry: entry.into(),
            at: now,
        });
        self.last_action_at = now;
        self.updated_at = now;
    }

    /// Move to a new scene, replacing the game-state blob when one is given.
    pub fn change_scene(&mut self, scene: impl Into<String>, game_state: Option<Value>) {
        self.current_scene = scene.into();
        if let Some(state) = game_state {
            self.game_state = state;
        }
        self.updated_at = Utc::now();
    }

    /// Mark the session finished.
    pub fn close(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
