//! GitHub Actions workflow scanning.
//!
//! Every `*.yml` file directly inside the workflows directory is parsed in
//! turn, and the first step whose `uses` names the companion action wins.
//! Jobs are visited in document order, steps in sequence order. Scanning
//! stops at the first match; files after it are never opened.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::discovery::{Discovery, ParseFailure, Strictness};
use crate::config::schema::{ConfigRecord, WorkflowStep, ACTION_PREFIX};
use crate::error::{LintPythonError, Result};

/// Workflows directory, relative to the project root.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Glob matched against entries of the workflows directory.
const WORKFLOW_PATTERN: &str = "*.yml";

#[derive(Debug, Deserialize)]
struct WorkflowDocument {
    // Mapping keeps document order, which decides which job wins.
    jobs: serde_yaml::Mapping,
}

#[derive(Debug, Deserialize)]
struct JobDocument {
    #[serde(default)]
    steps: Vec<StepDocument>,
}

#[derive(Debug, Deserialize)]
struct StepDocument {
    uses: Option<String>,
    // Only typed once `uses` matches; other actions take arbitrary inputs.
    #[serde(rename = "with", default)]
    with: Option<serde_yaml::Value>,
}

/// A matching step and the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedStep {
    pub path: PathBuf,
    pub step: WorkflowStep,
}

/// Outcome of scanning a workflows directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowScan {
    pub outcome: Discovery<LocatedStep>,
    /// Malformed files passed over in lenient mode.
    pub skipped: Vec<ParseFailure>,
}

/// Scans a workflows directory for the companion action step.
#[derive(Debug, Clone)]
pub struct WorkflowScanner {
    dir: PathBuf,
    strictness: Strictness,
}

impl WorkflowScanner {
    /// Scanner for the default workflows directory under `project_root`.
    pub fn new(project_root: &Path, strictness: Strictness) -> Self {
        Self::with_dir(project_root.join(WORKFLOWS_DIR), strictness)
    }

    /// Scanner for an explicit directory.
    pub fn with_dir(dir: PathBuf, strictness: Strictness) -> Self {
        Self { dir, strictness }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Workflow files in the order they are scanned.
    pub fn workflow_files(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        // Only the directory part is escaped; the file pattern must stay live.
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&self.dir.to_string_lossy()),
            WORKFLOW_PATTERN
        );

        let paths = glob::glob(&pattern).map_err(|e| LintPythonError::Other(e.into()))?;
        let mut files = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::debug!("Skipping unreadable workflow entry: {}", e),
            }
        }
        Ok(files)
    }

    /// Scan workflow files until one yields a matching step.
    pub fn scan(&self) -> Result<WorkflowScan> {
        let mut skipped = Vec::new();

        for path in self.workflow_files()? {
            tracing::debug!("Scanning {}", path.display());
            match scan_workflow_file(&path) {
                Discovery::Found(step) => {
                    return Ok(WorkflowScan {
                        outcome: Discovery::Found(LocatedStep { path, step }),
                        skipped,
                    });
                }
                Discovery::NotFound => {}
                Discovery::ParseError(failure) => match self.strictness {
                    Strictness::Lenient => {
                        tracing::warn!("Unable to parse {}", failure);
                        skipped.push(failure);
                    }
                    Strictness::Strict => {
                        return Ok(WorkflowScan {
                            outcome: Discovery::ParseError(failure),
                            skipped,
                        });
                    }
                },
            }
        }

        Ok(WorkflowScan {
            outcome: Discovery::NotFound,
            skipped,
        })
    }
}

/// Look for the companion action step in one workflow file.
pub fn scan_workflow_file(path: &Path) -> Discovery<WorkflowStep> {
    match fs::read_to_string(path) {
        Ok(content) => parse_workflow(&content, path),
        Err(e) => Discovery::ParseError(ParseFailure::new(path, e)),
    }
}

/// Find the companion action step in workflow content read from `path`.
pub fn parse_workflow(content: &str, path: &Path) -> Discovery<WorkflowStep> {
    let document: WorkflowDocument = match serde_yaml::from_str(content) {
        Ok(document) => document,
        Err(e) => return Discovery::ParseError(ParseFailure::new(path, e)),
    };

    for (name, job) in document.jobs {
        let job: JobDocument = match serde_yaml::from_value(job) {
            Ok(job) => job,
            Err(e) => {
                let name = name.as_str().unwrap_or("?").to_string();
                return Discovery::ParseError(ParseFailure::new(
                    path,
                    format!("job '{}': {}", name, e),
                ));
            }
        };

        for step in job.steps {
            let uses = match step.uses {
                Some(uses) if uses.starts_with(ACTION_PREFIX) => uses,
                _ => continue,
            };

            let with = match step.with {
                None | Some(serde_yaml::Value::Null) => ConfigRecord::default(),
                Some(value) => match serde_yaml::from_value(value) {
                    Ok(record) => record,
                    Err(e) => {
                        return Discovery::ParseError(ParseFailure::new(
                            path,
                            format!("{} inputs: {}", uses, e),
                        ));
                    }
                },
            };
            return Discovery::Found(WorkflowStep { uses, with });
        }
    }

    Discovery::NotFound
}

/// Strict standalone lookup of the companion action step.
///
/// Unlike the resolver, a malformed workflow file or a missing step is an
/// error here; callers decide whether to log it or abort.
pub fn discover_workflow_step(project_root: &Path) -> Result<LocatedStep> {
    let scanner = WorkflowScanner::new(project_root, Strictness::Strict);
    scanner
        .scan()?
        .outcome
        .strict()?
        .ok_or_else(|| LintPythonError::StepNotDiscovered {
            dir: scanner.dir().to_path_buf(),
        })
}
