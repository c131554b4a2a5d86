//! Error types for the persistence layer.

use df_core::{CharacterId, SessionId, UserId};

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested character does not exist.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// The requested session does not exist.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// The character exists but belongs to another user.
    #[error("character {character} is not owned by user {user}")]
    AccessDenied {
        /// The character that was requested.
        character: CharacterId,
        /// The user who requested it.
        user: UserId,
    },

    /// A file-backed store failed to read or write its file.
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A file-backed store holds data that does not parse.
    #[error("store data error: {0}")]
    Serde(#[from] serde_json::Error),
}
