//! Configuration discovery, parsing, and validation for lint-python.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - Per-source scan outcomes in [`discovery`]
//! - `pyproject.toml` scanning in [`project`]
//! - GitHub Actions workflow scanning in [`workflow`]
//! - Source precedence in [`resolver`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use lint_python::config::{resolve, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("pyproject.toml"),
//!     "[tool.lint-python]\nsource = \"src/\"\nlint-version = \"2\"\n",
//! )
//! .unwrap();
//!
//! let resolution = resolve(temp.path()).unwrap();
//! let config = validate(&resolution.record, "2.1.0").unwrap();
//! assert_eq!(config.source, "src/");
//! ```
//!
//! # Configuration Sources
//!
//! lint-python looks for configuration in this order:
//! 1. The `[tool.lint-python]` table of `pyproject.toml`
//! 2. The `with:` inputs of the first `CERT-Polska/lint-python-action` step
//!    in `.github/workflows/*.yml`, with `lint-version` taken from `@v...`

pub mod discovery;
pub mod project;
pub mod resolver;
pub mod schema;
pub mod validator;
pub mod workflow;

// Schema re-exports
pub use schema::{ConfigRecord, LintConfig, Linter, WorkflowStep, ACTION_PREFIX};

// Discovery re-exports
pub use discovery::{Discovery, ParseFailure, Strictness};

// Scanner re-exports
pub use project::{scan_project_file, PROJECT_FILE};
pub use workflow::{discover_workflow_step, LocatedStep, WorkflowScan, WorkflowScanner, WORKFLOWS_DIR};

// Resolver re-exports
pub use resolver::{resolve, resolve_project_file, resolve_workflow, ConfigOrigin, Resolution};

// Validator re-exports
pub use validator::{
    check_config, normalize_requirement, validate, version_satisfies, Severity, ValidationIssue,
};
