//! Configuration validation rules.
//!
//! This module validates a discovered configuration:
//! - `source` must be present
//! - `lint-version`, when given, must match the running version
//!
//! Version matching is a string prefix test. A requirement without a dot
//! gets one appended first, so `"2"` accepts `2.5.1` but not `20.0.0`.
//! Multi-component requirements are used as-is: `"2.3"` also accepts `2.30.0`.

use crate::config::schema::{ConfigRecord, LintConfig};
use crate::error::{LintPythonError, Result};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Validation issue with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Rule identifier
    pub rule: &'static str,
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    fn error(rule: &'static str, message: String) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(rule: &'static str, message: String) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Turn a requirement into the prefix it must match.
pub fn normalize_requirement(required: &str) -> String {
    if required.contains('.') {
        required.to_string()
    } else {
        format!("{}.", required)
    }
}

/// Whether `installed` satisfies the `required` version.
pub fn version_satisfies(required: &str, installed: &str) -> bool {
    installed.starts_with(&normalize_requirement(required))
}

/// Check a configuration without logging.
///
/// A missing `source` is reported alone; version rules are not evaluated
/// for a record that is structurally incomplete.
pub fn check_config(record: &ConfigRecord, installed: &str) -> Vec<ValidationIssue> {
    if record.source.is_none() {
        return vec![ValidationIssue::error(
            "missing-source",
            "'source' is required field in lint-python configuration.".to_string(),
        )];
    }

    let Some(required) = record.lint_version.as_deref() else {
        return vec![ValidationIssue::warning(
            "unpinned-version",
            "Required lint-python version is unspecified. It's recommended to specify \
             at least major required version in case of breaking changes."
                .to_string(),
        )];
    };

    if version_satisfies(required, installed) {
        Vec::new()
    } else {
        vec![ValidationIssue::error(
            "version-mismatch",
            format!(
                "Version mismatch: installed lint-python is v{} but v{} is required by project.",
                installed, required
            ),
        )]
    }
}

/// Validate a configuration, logging every issue found.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any issue is an error.
pub fn validate(record: &ConfigRecord, installed: &str) -> Result<LintConfig> {
    if let Some(required) = record.lint_version.as_deref() {
        tracing::debug!("Required version: {}", normalize_requirement(required));
    }

    let issues = check_config(record, installed);

    for issue in &issues {
        match issue.severity {
            Severity::Warning => tracing::warn!("{}", issue.message),
            Severity::Error => tracing::error!("{}", issue.message),
        }
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        return Err(LintPythonError::ConfigValidationError {
            message: errors.join("; "),
        });
    }

    LintConfig::from_record(record).ok_or_else(|| LintPythonError::ConfigValidationError {
        message: "'source' is required field in lint-python configuration.".to_string(),
    })
}
