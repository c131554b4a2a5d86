//! JSON-file-backed store.
//!
//! Wraps [`MemoryStore`] and rewrites the whole state file after every
//! mutation, via a temp-file rename so a crash mid-write cannot leave a
//! torn file. Plenty for a single-player CLI; a real service would put a
//! database behind the [`Store`] trait instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use df_core::{Character, CharacterId, GameSession, RollRecord, SessionId, UserId};

use crate::error::StoreResult;
use crate::memory::{MemoryStore, StoreState};
use crate::Store;

/// A store persisted to a single JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonStore {
    /// Open a store at `path`, loading existing state if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let inner = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let state: StoreState = serde_json::from_str(&raw)?;
            debug!(path = %path.display(), characters = state.characters.len(), "loaded store");
            MemoryStore::from_state(state)
        } else {
            MemoryStore::new()
        };
        Ok(Self { path, inner })
    }

    /// Where the state file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(self.inner.state())?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn insert_character(&mut self, character: Character) -> StoreResult<Character> {
        let out = self.inner.insert_character(character)?;
        self.save()?;
        Ok(out)
    }

    fn character(&self, id: CharacterId) -> StoreResult<Character> {
        self.inner.character(id)
    }

    fn active_character(&self, user: UserId) -> StoreResult<Option<Character>> {
        self.inner.active_character(user)
    }

    fn update_character(&mut self, character: Character) -> StoreResult<Character> {
        let out = self.inner.update_character(character)?;
        self.save()?;
        Ok(out)
    }

    fn deactivate_characters(&mut self, user: UserId) -> StoreResult<usize> {
        let count = self.inner.deactivate_characters(user)?;
        self.save()?;
        Ok(count)
    }

    fn insert_session(&mut self, session: GameSession) -> StoreResult<GameSession> {
        let out = self.inner.insert_session(session)?;
        self.save()?;
        Ok(out)
    }

    fn session(&self, id: SessionId) -> StoreResult<GameSession> {
        self.inner.session(id)
    }

    fn active_session(&self, user: UserId) -> StoreResult<Option<GameSession>> {
        self.inner.active_session(user)
    }

    fn update_session(&mut self, session: GameSession) -> StoreResult<GameSession> {
        let out = self.inner.update_session(session)?;
        self.save()?;
        Ok(out)
    }

    fn close_sessions(&mut self, user: UserId) -> StoreResult<usize> {
        let count = self.inner.close_sessions(user)?;
        self.save()?;
        Ok(count)
    }

    fn record_roll(&mut self, roll: RollRecord) -> StoreResult<()> {
        self.inner.record_roll(roll)?;
        self.save()
    }

    fn rolls_for_session(&self, session: SessionId) -> StoreResult<Vec<RollRecord>> {
        self.inner.rolls_for_session(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_core::{Ancestry, CharacterClass};
    use tempfile::TempDir;

    fn character(user: i64, name: &str) -> Character {
        Character::new(UserId(user), name, CharacterClass::Ranger, Ancestry::Elf)
    }

    #[test]
    fn state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("duskfall.json");

        let id = {
            let mut store = JsonStore::open(&path).unwrap();
            store.insert_character(character(1, "Kira")).unwrap().id
        };

        let store = JsonStore::open(&path).unwrap();
        let loaded = store.character(id).unwrap();
        assert_eq!(loaded.name, "Kira");
        assert!(loaded.is_active);
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("fresh.json")).unwrap();
        assert!(store.active_character(UserId(1)).unwrap().is_none());
    }

    #[test]
    fn deactivation_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("duskfall.json");

        {
            let mut store = JsonStore::open(&path).unwrap();
            store.insert_character(character(1, "Old")).unwrap();
            store.insert_character(character(1, "New")).unwrap();
        }

        let store = JsonStore::open(&path).unwrap();
        let active = store.active_character(UserId(1)).unwrap().unwrap();
        assert_eq!(active.name, "New");
    }

    #[test]
    fn sessions_and_rolls_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("duskfall.json");

        let session_id = {
            let mut store = JsonStore::open(&path).unwrap();
            let c = store.insert_character(character(1, "Kira")).unwrap();
            let s = store
                .insert_session(GameSession::new(UserId(1), c.id))
                .unwrap();
            store
                .record_roll(RollRecord::new(
                    s.id,
                    UserId(1),
                    9,
                    4,
                    0,
                    12,
                    "combat",
                    false,
                    "Failure.",
                ))
                .unwrap();
            s.id
        };

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.rolls_for_session(session_id).unwrap().len(), 1);
    }
}
