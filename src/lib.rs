//! lint-python - Run a project's Python linters from its own configuration.
//!
//! lint-python reads the project's lint configuration from the
//! `[tool.lint-python]` table of `pyproject.toml`, or failing that from the
//! `CERT-Polska/lint-python-action` step of a GitHub Actions workflow. It
//! checks that the project accepts the running lint-python version, then
//! drives isort, black, flake8 and mypy.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration discovery, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Linter installation and execution
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use lint_python::config::version_satisfies;
//!
//! assert!(version_satisfies("2", "2.5.1"));
//! assert!(!version_satisfies("2", "20.0.0"));
//! ```
//!
//! For file-based discovery, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LintPythonError, Result};

/// Version of the running lint-python, checked against `lint-version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
