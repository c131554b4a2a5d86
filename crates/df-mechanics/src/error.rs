//! Error types for the mechanics engine.

/// Errors that can occur during dice resolution.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A die face outside 1..=12 was supplied by the caller. Rejected at
    /// the boundary, never clamped.
    #[error("invalid die value: {0} (must be 1..=12)")]
    InvalidDie(u32),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
