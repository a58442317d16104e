//! Outcome of looking for configuration in a single source.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{LintPythonError, Result};

/// How a scanner reacts to a source it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Warn, treat the source as absent and keep looking.
    #[default]
    Lenient,
    /// Stop and report the failure.
    Strict,
}

/// A configuration source that exists but could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub message: String,
}

impl ParseFailure {
    pub fn new(path: &Path, message: impl fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl From<ParseFailure> for LintPythonError {
    fn from(failure: ParseFailure) -> Self {
        LintPythonError::ConfigParseError {
            path: failure.path,
            message: failure.message,
        }
    }
}

/// Result of scanning one configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery<T> {
    Found(T),
    NotFound,
    ParseError(ParseFailure),
}

impl<T> Discovery<T> {
    /// Collapse a parse error into absence, logging it.
    pub fn lenient(self) -> Option<T> {
        match self {
            Discovery::Found(value) => Some(value),
            Discovery::NotFound => None,
            Discovery::ParseError(failure) => {
                tracing::warn!("Unable to parse {}", failure);
                None
            }
        }
    }

    /// Propagate a parse error to the caller.
    pub fn strict(self) -> Result<Option<T>> {
        match self {
            Discovery::Found(value) => Ok(Some(value)),
            Discovery::NotFound => Ok(None),
            Discovery::ParseError(failure) => Err(failure.into()),
        }
    }
}
