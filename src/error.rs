//! Error types for lint-python operations.
//!
//! This module defines [`LintPythonError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Parse errors met while scanning are downgraded to absence by the
//!   scanners and never reach the top level in lenient mode
//! - Discovery, validation and subprocess failures are fatal and map to a
//!   non-zero exit code
//! - Use `anyhow::Error` (via `LintPythonError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lint-python operations.
#[derive(Debug, Error)]
pub enum LintPythonError {
    /// Neither `pyproject.toml` nor any workflow file carried a configuration.
    #[error(
        "lint-python configuration not discovered in project ({}). Are you in project root directory?",
        root.display()
    )]
    ConfigNotDiscovered { root: PathBuf },

    /// No workflow step referencing the companion action was found.
    #[error("No lint-python-action step found in {}", dir.display())]
    StepNotDiscovered { dir: PathBuf },

    /// Failed to parse a configuration source.
    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Discovered configuration did not pass validation.
    #[error("lint-python configuration not validated correctly: {message}")]
    ConfigValidationError { message: String },

    /// External command exited unsuccessfully or could not be started.
    #[error("Command {command} failed with return code {}", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lint-python operations.
pub type Result<T> = std::result::Result<T, LintPythonError>;
