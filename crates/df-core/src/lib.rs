//! Core types for Duskfall: characters, sessions, and roll records.
//!
//! This crate defines the data model the rest of the workspace operates
//! on. Everything here is a value type: the store hands out owned
//! snapshots, mutations produce new snapshots, and nothing holds hidden
//! global state. Resource pools clamp on every write, so the 0..=10
//! Hope/Fear bounds and the 0..=max hit-point bounds hold by
//! construction.

/// Characters, classes, ancestries, and attribute blocks.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Clamped resource pools.
pub mod pool;
/// Dice-roll audit records.
pub mod roll;
/// Game sessions and their logs.
pub mod session;

/// Re-export character types.
pub use character::{Ancestry, Attributes, Character, CharacterClass, CharacterId, UserId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the pool type.
pub use pool::{Pool, RESOURCE_POOL_MAX};
/// Re-export roll-record types.
pub use roll::{RollId, RollRecord};
/// Re-export session types.
pub use session::{ActionRecord, GameSession, SessionId};
