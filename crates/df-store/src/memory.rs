//! In-memory store: the default for tests and embedded use.

use serde::{Deserialize, Serialize};
use tracing::debug;

use df_core::{Character, CharacterId, GameSession, RollRecord, SessionId, UserId};

use crate::error::{StoreError, StoreResult};
use crate::{Store, latest_first};

/// The full persisted state: every character, session, and roll record.
///
/// Shared between the in-memory store and the JSON file store so both
/// serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    /// All characters, active and deactivated.
    pub characters: Vec<Character>,
    /// All sessions, active and closed.
    pub sessions: Vec<GameSession>,
    /// Append-only roll history.
    pub rolls: Vec<RollRecord>,
}

/// A store that lives and dies with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: StoreState,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing state (used by the file store after loading).
    pub fn from_state(state: StoreState) -> Self {
        Self { state }
    }

    /// Borrow the underlying state (used by the file store when saving).
    pub fn state(&self) -> &StoreState {
        &self.state
    }
}

impl Store for MemoryStore {
    fn insert_character(&mut self, character: Character) -> StoreResult<Character> {
        let user = character.user_id;
        let deactivated = self.deactivate_characters(user)?;
        debug!(%user, deactivated, name = %character.name, "inserting character");
        self.state.characters.push(character.clone());
        Ok(character)
    }

    fn character(&self, id: CharacterId) -> StoreResult<Character> {
        self.state
            .characters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::CharacterNotFound(id))
    }

    fn active_character(&self, user: UserId) -> StoreResult<Option<Character>> {
        Ok(self
            .state
            .characters
            .iter()
            .find(|c| c.user_id == user && c.is_active)
            .cloned())
    }

    fn update_character(&mut self, character: Character) -> StoreResult<Character> {
        let slot = self
            .state
            .characters
            .iter_mut()
            .find(|c| c.id == character.id)
            .ok_or(StoreError::CharacterNotFound(character.id))?;
        *slot = character.clone();
        Ok(character)
    }

    fn deactivate_characters(&mut self, user: UserId) -> StoreResult<usize> {
        let mut count = 0;
        for c in self
            .state
            .characters
            .iter_mut()
            .filter(|c| c.user_id == user && c.is_active)
        {
            c.is_active = false;
            c.touch();
            count += 1;
        }
        Ok(count)
    }

    fn insert_session(&mut self, session: GameSession) -> StoreResult<GameSession> {
        let user = session.user_id;
        let closed = self.close_sessions(user)?;
        debug!(%user, closed, "inserting session");
        self.state.sessions.push(session.clone());
        Ok(session)
    }

    fn session(&self, id: SessionId) -> StoreResult<GameSession> {
        self.state
            .sessions
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::SessionNotFound(id))
    }

    fn active_session(&self, user: UserId) -> StoreResult<Option<GameSession>> {
        Ok(self
            .state
            .sessions
            .iter()
            .find(|s| s.user_id == user && s.is_active)
            .cloned())
    }

    fn update_session(&mut self, session: GameSession) -> StoreResult<GameSession> {
        let slot = self
            .state
            .sessions
            .iter_mut()
            .find(|s| s.id == session.id)
            .ok_or(StoreError::SessionNotFound(session.id))?;
        *slot = session.clone();
        Ok(session)
    }

    fn close_sessions(&mut self, user: UserId) -> StoreResult<usize> {
        let mut count = 0;
        for s in self
            .state
            .sessions
            .iter_mut()
            .filter(|s| s.user_id == user && s.is_active)
        {
            s.close();
            count += 1;
        }
        Ok(count)
    }

    fn record_roll(&mut self, roll: RollRecord) -> StoreResult<()> {
        self.state.rolls.push(roll);
        Ok(())
    }

    fn rolls_for_session(&self, session: SessionId) -> StoreResult<Vec<RollRecord>> {
        let mut rolls: Vec<RollRecord> = self
            .state
            .rolls
            .iter()
            .filter(|r| r.session_id == session)
            .cloned()
            .collect();
        latest_first(&mut rolls);
        Ok(rolls)
    }
}
