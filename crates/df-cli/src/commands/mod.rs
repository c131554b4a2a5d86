//! Subcommand implementations.

pub mod new;
pub mod play;
pub mod roll;
pub mod sheet;

use std::path::Path;

use colored::Colorize;

use df_mechanics::RollOutcome;
use df_store::JsonStore;

/// Open the state file, mapping store errors to CLI messages.
pub(crate) fn open_store(path: &Path) -> Result<JsonStore, String> {
    JsonStore::open(path).map_err(|e| format!("cannot open {}: {e}", path.display()))
}

/// Color an outcome description by severity.
pub(crate) fn styled_outcome(outcome: &RollOutcome) -> String {
    let text = outcome.description.as_str();
    if outcome.critical_success {
        text.green().bold().to_string()
    } else if outcome.critical_failure {
        text.red().bold().to_string()
    } else if outcome.mixed {
        text.yellow().to_string()
    } else if outcome.success {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}
