//! Game orchestration for Duskfall.
//!
//! [`GameEngine`] owns the wiring the rules crates deliberately avoid:
//! it pulls character and session snapshots from a [`df_store::Store`],
//! runs rolls and classification over them, writes the results back, and
//! keeps the narrative log fed, substituting fixed fallback prose
//! whenever the narrator misbehaves. The engine itself is synchronous
//! and single-threaded; embedders own concurrency and request ordering.

/// Engine configuration.
pub mod config;
/// The engine itself.
pub mod engine;
/// Error types.
pub mod error;
/// Operation result values.
pub mod report;

pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::{EngineError, EngineResult};
pub use report::{ActionReport, DamageReport, RollReport, SessionStart};
