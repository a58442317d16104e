//! Configuration resolution across both sources.
//!
//! `pyproject.toml` always wins. The workflows directory is only scanned
//! when the project file has no usable `[tool.lint-python]` section.

use std::path::{Path, PathBuf};

use crate::config::discovery::{Discovery, ParseFailure, Strictness};
use crate::config::project::{project_file_path, scan_project_file};
use crate::config::schema::ConfigRecord;
use crate::config::workflow::{discover_workflow_step, LocatedStep, WorkflowScanner};
use crate::error::{LintPythonError, Result};

/// Where a resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// The `[tool.lint-python]` section of the project file.
    ProjectFile(PathBuf),
    /// The `with:` inputs of a workflow step.
    Workflow { path: PathBuf, uses: String },
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigOrigin::ProjectFile(path) => {
                write!(f, "{} [tool.lint-python]", path.display())
            }
            ConfigOrigin::Workflow { path, uses } => {
                write!(f, "{} (uses: {})", path.display(), uses)
            }
        }
    }
}

/// A discovered, not yet validated, configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: ConfigRecord,
    pub origin: ConfigOrigin,
    /// Sources that could not be parsed and were treated as absent.
    pub skipped: Vec<ParseFailure>,
}

/// Locate the project's lint configuration.
///
/// # Errors
///
/// Returns `ConfigNotDiscovered` when neither source carries a configuration.
pub fn resolve(project_root: &Path) -> Result<Resolution> {
    let mut skipped = Vec::new();

    match scan_project_file(project_root) {
        Discovery::Found(record) => {
            return Ok(Resolution {
                record,
                origin: ConfigOrigin::ProjectFile(project_file_path(project_root)),
                skipped,
            });
        }
        Discovery::NotFound => {}
        Discovery::ParseError(failure) => {
            tracing::warn!("Unable to parse {}", failure);
            skipped.push(failure);
        }
    }

    let scan = WorkflowScanner::new(project_root, Strictness::Lenient).scan()?;
    skipped.extend(scan.skipped);

    match scan.outcome.lenient() {
        Some(LocatedStep { path, step }) => {
            tracing::debug!("Using {} step from {}", step.uses, path.display());
            Ok(Resolution {
                record: step.to_record(),
                origin: ConfigOrigin::Workflow {
                    path,
                    uses: step.uses,
                },
                skipped,
            })
        }
        None => Err(LintPythonError::ConfigNotDiscovered {
            root: project_root.to_path_buf(),
        }),
    }
}

/// Resolve from the project file only.
pub fn resolve_project_file(project_root: &Path) -> Result<Resolution> {
    scan_project_file(project_root)
        .strict()?
        .map(|record| Resolution {
            record,
            origin: ConfigOrigin::ProjectFile(project_file_path(project_root)),
            skipped: Vec::new(),
        })
        .ok_or_else(|| LintPythonError::ConfigNotDiscovered {
            root: project_root.to_path_buf(),
        })
}

/// Resolve from the workflows directory only, failing on any malformed file.
pub fn resolve_workflow(project_root: &Path) -> Result<Resolution> {
    let LocatedStep { path, step } = discover_workflow_step(project_root)?;
    Ok(Resolution {
        record: step.to_record(),
        origin: ConfigOrigin::Workflow {
            path,
            uses: step.uses,
        },
        skipped: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::project::PROJECT_FILE;
    use crate::config::workflow::WORKFLOWS_DIR;
    use std::fs;
    use tempfile::TempDir;

    const PYPROJECT: &str = r#"
[tool.lint-python]
source = "pkg/"
lint-version = "2"
use-flake8 = false
"#;

    const WORKFLOW: &str = r#"
jobs:
  lint:
    steps:
      - uses: CERT-Polska/lint-python-action@v2.3.1
        with:
          source: src/
          lint-version: "1"
"#;

    fn write_workflow(root: &Path, name: &str, content: &str) {
        let dir = root.join(WORKFLOWS_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn project_file_takes_precedence() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), PYPROJECT).unwrap();
        write_workflow(temp.path(), "lint.yml", WORKFLOW);

        let resolution = resolve(temp.path()).unwrap();

        assert_eq!(
            resolution.record,
            ConfigRecord {
                source: Some("pkg/".to_string()),
                lint_version: Some("2".to_string()),
                use_flake8: Some(false),
                ..Default::default()
            }
        );
        assert!(matches!(resolution.origin, ConfigOrigin::ProjectFile(_)));
    }

    #[test]
    fn workflows_untouched_when_project_file_matches() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), PYPROJECT).unwrap();
        write_workflow(temp.path(), "broken.yml", "jobs: [");

        let resolution = resolve(temp.path()).unwrap();

        // A scanned malformed workflow would have been recorded as skipped.
        assert!(resolution.skipped.is_empty());
        assert!(matches!(resolution.origin, ConfigOrigin::ProjectFile(_)));
    }

    #[test]
    fn falls_back_to_workflow_step() {
        let temp = TempDir::new().unwrap();
        write_workflow(temp.path(), "lint.yml", WORKFLOW);

        let resolution = resolve(temp.path()).unwrap();

        assert_eq!(resolution.record.lint_version.as_deref(), Some("2.3.1"));
        assert_eq!(resolution.record.source.as_deref(), Some("src/"));
        match resolution.origin {
            ConfigOrigin::Workflow { uses, .. } => {
                assert_eq!(uses, "CERT-Polska/lint-python-action@v2.3.1")
            }
            other => panic!("unexpected origin {other:?}"),
        }
    }

    #[test]
    fn falls_back_when_project_file_lacks_section() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), "[tool.black]\n").unwrap();
        write_workflow(temp.path(), "lint.yml", WORKFLOW);

        let resolution = resolve(temp.path()).unwrap();
        assert!(matches!(resolution.origin, ConfigOrigin::Workflow { .. }));
        assert!(resolution.skipped.is_empty());
    }

    #[test]
    fn malformed_project_file_falls_back_to_workflow() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), "[tool.lint-python").unwrap();
        write_workflow(temp.path(), "lint.yml", WORKFLOW);

        let resolution = resolve(temp.path()).unwrap();
        assert!(matches!(resolution.origin, ConfigOrigin::Workflow { .. }));
        assert_eq!(resolution.skipped.len(), 1);
        assert!(resolution.skipped[0].path.ends_with(PROJECT_FILE));
    }

    #[test]
    fn malformed_workflow_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_workflow(temp.path(), "a.yml", "jobs: {lint: [");
        write_workflow(temp.path(), "b.yml", WORKFLOW);

        let resolution = resolve(temp.path()).unwrap();
        assert_eq!(resolution.record.source.as_deref(), Some("src/"));
        assert_eq!(resolution.skipped.len(), 1);
        assert!(resolution.skipped[0].path.ends_with("a.yml"));
    }

    #[test]
    fn nothing_found_is_not_discovered() {
        let temp = TempDir::new().unwrap();
        write_workflow(temp.path(), "ci.yml", "jobs:\n  test:\n    steps:\n      - run: make\n");

        let err = resolve(temp.path()).unwrap_err();
        assert!(matches!(err, LintPythonError::ConfigNotDiscovered { .. }));
    }

    #[test]
    fn resolve_project_file_ignores_workflows() {
        let temp = TempDir::new().unwrap();
        write_workflow(temp.path(), "lint.yml", WORKFLOW);

        let err = resolve_project_file(temp.path()).unwrap_err();
        assert!(matches!(err, LintPythonError::ConfigNotDiscovered { .. }));
    }

    #[test]
    fn resolve_workflow_ignores_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), PYPROJECT).unwrap();
        write_workflow(temp.path(), "lint.yml", WORKFLOW);

        let resolution = resolve_workflow(temp.path()).unwrap();
        assert_eq!(resolution.record.source.as_deref(), Some("src/"));
    }

    #[test]
    fn origin_display_names_source() {
        let origin = ConfigOrigin::Workflow {
            path: PathBuf::from(".github/workflows/lint.yml"),
            uses: "CERT-Polska/lint-python-action@v2".to_string(),
        };
        assert!(origin.to_string().contains("lint.yml"));
        assert!(origin.to_string().contains("@v2"));
    }
}
