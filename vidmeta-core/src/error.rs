// ============================================================================
// vidmeta-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Prober and Discovery
//
// Extraction never fails, so every variant here belongs either to running the
// inspection tool or to locating the files handed to it.
//
// KEY COMPONENTS:
// - CoreError: the error enum surfaced to callers
// - CoreResult: result alias used throughout the crate

// ---- External crate imports ----
use thiserror::Error;

/// Errors surfaced by vidmeta-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The inspection executable could not be resolved.
    #[error("Inspection tool '{0}' not found. Is it installed and on PATH?")]
    ToolNotFound(String),

    /// The tool ran but exited outside its "printed metadata" convention.
    ///
    /// `status` is `None` when the child was terminated by a signal. The
    /// captured diagnostic text is kept so callers can inspect it.
    #[error("{tool} exited with unexpected status {}", display_status(.status))]
    UnexpectedExitStatus {
        tool: String,
        status: Option<i32>,
        diagnostic_text: String,
    },

    /// Spawning or waiting on the child process failed.
    #[error("Failed to run inspection tool: {0}")]
    ProbeFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("No supported video files found")]
    NoFilesFound,

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// Diagnostic text captured before the error was raised, if any.
    pub fn diagnostic_text(&self) -> Option<&str> {
        match self {
            CoreError::UnexpectedExitStatus {
                diagnostic_text, ..
            } => Some(diagnostic_text),
            _ => None,
        }
    }
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "(terminated by signal)".to_string(),
    }
}

/// Result type for vidmeta-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
