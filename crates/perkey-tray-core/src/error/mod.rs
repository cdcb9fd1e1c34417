use error_location::ErrorLocation;
use thiserror::Error;

/// Lighting core errors with source location tracking.
///
/// Process execution failures are deliberately absent: they are reported
/// through [`crate::RunOutcome`] instead of being raised.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Action index outside the registry table.
    #[error("Unknown action index {index} (registry has {available} actions) {location}")]
    UnknownAction {
        /// Requested action index.
        index: usize,
        /// Number of actions in the registry.
        available: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Keyboard model identifier not in the supported set.
    #[error("Unsupported keyboard model: {value:?} {location}")]
    UnknownModel {
        /// The rejected identifier.
        value: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Textual command line that cannot be turned into a program and arguments.
    #[error("{reason} {location}")]
    InvalidCommandLine {
        /// What was wrong with the line.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
