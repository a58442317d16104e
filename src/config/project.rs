//! `pyproject.toml` scanning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::discovery::{Discovery, ParseFailure};
use crate::config::schema::ConfigRecord;

/// Project file name, relative to the project root.
pub const PROJECT_FILE: &str = "pyproject.toml";

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Tools,
}

#[derive(Debug, Default, Deserialize)]
struct Tools {
    #[serde(rename = "lint-python")]
    lint_python: Option<ConfigRecord>,
}

/// Path of the project file for `project_root`.
pub fn project_file_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_FILE)
}

/// Look for a `[tool.lint-python]` section in the project file.
pub fn scan_project_file(project_root: &Path) -> Discovery<ConfigRecord> {
    let path = project_file_path(project_root);
    if !path.is_file() {
        tracing::debug!("{} not found", path.display());
        return Discovery::NotFound;
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => return Discovery::ParseError(ParseFailure::new(&path, e)),
    };

    parse_project_file(&content, &path)
}

/// Parse project file content already read from `path`.
pub fn parse_project_file(content: &str, path: &Path) -> Discovery<ConfigRecord> {
    match toml::from_str::<PyProject>(content) {
        Ok(PyProject {
            tool: Tools {
                lint_python: Some(record),
            },
        }) => {
            tracing::debug!("Using [tool.lint-python] from {}", path.display());
            Discovery::Found(record)
        }
        Ok(_) => {
            tracing::debug!("No [tool.lint-python] section in {}", path.display());
            Discovery::NotFound
        }
        Err(e) => Discovery::ParseError(ParseFailure::new(path, e.message())),
    }
}
