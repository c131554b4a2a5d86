//! Error types for the game engine.

use df_core::UserId;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can stop a game operation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The user has no active character to act with.
    #[error("no active character for user {0}")]
    NoActiveCharacter(UserId),

    /// The user has no active session to act in.
    #[error("no active session for user {0}")]
    NoActiveSession(UserId),

    /// Persistence failed or refused the operation.
    #[error(transparent)]
    Store(#[from] df_store::StoreError),
}
