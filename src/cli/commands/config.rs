//! Config command implementation.
//!
//! The `lint-python config` command shows the discovered configuration.
//! A valid configuration is shown with defaults filled in; an invalid one
//! is shown as found on disk and the command fails.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::{ConfigArgs, ConfigSource};
use crate::config::{resolve, resolve_project_file, resolve_workflow, validate, Resolution};
use crate::error::{LintPythonError, Result};
use crate::ui::UserInterface;
use crate::VERSION;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    fn resolve(&self) -> Result<Resolution> {
        match self.args.source {
            ConfigSource::Auto => resolve(&self.project_root),
            ConfigSource::Project => resolve_project_file(&self.project_root),
            ConfigSource::Workflow => resolve_workflow(&self.project_root),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.args.json {
            serde_json::to_string_pretty(value).map_err(|e| LintPythonError::Other(e.into()))
        } else {
            serde_yaml::to_string(value).map_err(|e| LintPythonError::Other(e.into()))
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolution = match self.resolve() {
            Ok(resolution) => resolution,
            Err(
                e @ (LintPythonError::ConfigNotDiscovered { .. }
                | LintPythonError::StepNotDiscovered { .. }
                | LintPythonError::ConfigParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if !self.args.json {
            ui.message(&format!("# {}", resolution.origin));
        }

        match validate(&resolution.record, VERSION) {
            Ok(config) => {
                ui.message(self.render(&config)?.trim_end());
                Ok(CommandResult::success())
            }
            Err(LintPythonError::ConfigValidationError { .. }) => {
                ui.message(self.render(&resolution.record)?.trim_end());
                ui.error("lint-python configuration not validated correctly.");
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
