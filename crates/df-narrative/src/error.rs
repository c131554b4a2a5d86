//! Error types for narrative generation.

/// Alias for `Result<T, NarrativeError>`.
pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Errors a narrator implementation may surface.
///
/// Callers never show these to the player; the engine substitutes a
/// fallback line instead.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// The generator failed or returned garbage.
    #[error("narrative generation failed: {0}")]
    Generation(String),

    /// The generator did not answer in time.
    #[error("narrative generation timed out")]
    Timeout,
}
