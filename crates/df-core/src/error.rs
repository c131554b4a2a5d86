//! Error types for the core data model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building core types from raw input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The class name does not match any known class.
    #[error("unknown class: \"{0}\"")]
    UnknownClass(String),

    /// The ancestry name does not match any known ancestry.
    #[error("unknown ancestry: \"{0}\"")]
    UnknownAncestry(String),
}
