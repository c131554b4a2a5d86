//! Audit records for resolved dice rolls.
//!
//! Every resolved roll is recorded against its session for history and
//! replay. Records are append-only and never mutated.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::UserId;
use crate::session::SessionId;

/// Unique identifier for a roll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollId(pub Uuid);

impl RollId {
    /// Generate a new random roll ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RollId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A recorded dual-die roll with its context and verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRecord {
    /// Stable identifier.
    pub id: RollId,
    /// Session the roll belongs to.
    pub session_id: SessionId,
    /// Rolling user.
    pub user_id: UserId,
    /// Hope die face (1..=12).
    pub hope_die: u32,
    /// Fear die face (1..=12).
    pub fear_die: u32,
    /// Flat modifier added to the higher die.
    pub modifier: i32,
    /// Difficulty threshold the roll was made against.
    pub difficulty: i32,
    /// Action category the roll resolved ("combat", "magic", ...).
    pub action_type: String,
    /// Whether the roll succeeded overall.
    pub success: bool,
    /// Raw dice summary, e.g. "Hope 7, Fear 4".
    pub description: String,
    /// Templated outcome text produced by the resolver.
    pub outcome_description: String,
    /// When the roll was made.
    pub created_at: DateTime<Utc>,
}

impl RollRecord {
    /// Build a record stamped with the current time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: SessionId,
        user_id: UserId,
        hope_die: u32,
        fear_die: u32,
        modifier: i32,
        difficulty: i32,
        action_type: impl Into<String>,
        success: bool,
        outcome_description: impl Into<String>,
    ) -> Self {
        Self {
            id: RollId::new(),
            session_id,
            user_id,
            hope_die,
            fear_die,
            modifier,
            difficulty,
            action_type: action_type.into(),
            success,
            description: format!("Hope {hope_die}, Fear {fear_die}"),
            outcome_description: outcome_description.into(),
            created_at: Utc::now(),
        }
    }
}
