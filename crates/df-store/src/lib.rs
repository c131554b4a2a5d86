//! Character, session, and roll persistence for Duskfall.
//!
//! The [`Store`] trait is the persistence collaborator the engine is
//! written against. Implementations own two invariants that callers must
//! never have to re-enforce:
//!
//! - at most one **active character** per user: inserting a character
//!   deactivates the user's previous ones (soft delete, never removal);
//! - at most one **active session** per user: inserting a session
//!   closes the user's previous ones.
//!
//! Characters and sessions are value snapshots: reads hand out owned
//! copies, writes accept a whole new copy. Roll records are append-only.

pub mod error;
/// File-backed store for the CLI.
pub mod file;
/// Process-local store.
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::JsonStore;
pub use memory::{MemoryStore, StoreState};

use df_core::{Character, CharacterId, GameSession, RollRecord, SessionId, UserId};

/// The persistence collaborator.
pub trait Store {
    /// Insert a fresh character, deactivating the user's previous ones.
    fn insert_character(&mut self, character: Character) -> StoreResult<Character>;

    /// Fetch a character by id.
    fn character(&self, id: CharacterId) -> StoreResult<Character>;

    /// The user's single active character, if any.
    fn active_character(&self, user: UserId) -> StoreResult<Option<Character>>;

    /// Replace a character snapshot.
    fn update_character(&mut self, character: Character) -> StoreResult<Character>;

    /// Deactivate every active character of a user. Returns how many.
    fn deactivate_characters(&mut self, user: UserId) -> StoreResult<usize>;

    /// Insert a fresh session, closing the user's previous ones.
    fn insert_session(&mut self, session: GameSession) -> StoreResult<GameSession>;

    /// Fetch a session by id.
    fn session(&self, id: SessionId) -> StoreResult<GameSession>;

    /// The user's single active session, if any.
    fn active_session(&self, user: UserId) -> StoreResult<Option<GameSession>>;

    /// Replace a session snapshot.
    fn update_session(&mut self, session: GameSession) -> StoreResult<GameSession>;

    /// Close every active session of a user. Returns how many.
    fn close_sessions(&mut self, user: UserId) -> StoreResult<usize>;

    /// Append a roll record to the history.
    fn record_roll(&mut self, roll: RollRecord) -> StoreResult<()>;

    /// All rolls recorded against a session, newest first.
    fn rolls_for_session(&self, session: SessionId) -> StoreResult<Vec<RollRecord>>;

    /// Fetch a character and verify it belongs to `user`.
    fn character_for_user(&self, id: CharacterId, user: UserId) -> StoreResult<Character> {
        let character = self.character(id)?;
        if character.user_id != user {
            return Err(StoreError::AccessDenied {
                character: id,
                user,
            });
        }
        Ok(character)
    }
}

/// Sort roll records newest first.
pub(crate) fn latest_first(rolls: &mut [RollRecord]) {
    rolls.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
