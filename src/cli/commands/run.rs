//! Run command implementation.
//!
//! The default `lint-python` invocation: discover the configuration,
//! validate it against the running version, then install and/or lint.
//! Nothing is installed or run unless validation passes.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{resolve, validate, LintConfig};
use crate::error::{LintPythonError, Result};
use crate::runner::{perform_install, perform_linting, ModuleRunner, PythonRunner};
use crate::ui::UserInterface;
use crate::VERSION;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
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
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Execute against an explicit module runner.
    pub fn execute_with(
        &self,
        runner: &dyn ModuleRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let resolution = match resolve(&self.project_root) {
            Ok(resolution) => resolution,
            Err(e @ LintPythonError::ConfigNotDiscovered { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };
        tracing::info!("Using configuration from {}", resolution.origin);

        let config = match validate(&resolution.record, VERSION) {
            Ok(config) => config,
            Err(LintPythonError::ConfigValidationError { .. }) => {
                ui.error("lint-python configuration not validated correctly.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        match self.perform(&config, runner) {
            Ok(()) => {
                if self.args.lints() {
                    ui.success("Linting finished");
                } else {
                    ui.success("Linters installed");
                }
                Ok(CommandResult::success())
            }
            Err(e @ LintPythonError::CommandFailed { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }

    fn perform(&self, config: &LintConfig, runner: &dyn ModuleRunner) -> Result<()> {
        if self.args.installs() {
            perform_install(config, self.args.with_extras, runner)?;
        }
        if self.args.lints() {
            perform_linting(config, self.args.check, runner)?;
        }
        Ok(())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = PythonRunner::new(&self.args.python).in_dir(&self.project_root);
        self.execute_with(&runner, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PROJECT_FILE, WORKFLOWS_DIR};
    use crate::runner::testing::RecordingRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(pyproject: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), pyproject).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: RunArgs, runner: &RecordingRunner) -> (CommandResult, MockUI) {
        let cmd = RunCommand::new(temp.path(), args);
        let mut ui = MockUI::new();
        let result = cmd.execute_with(runner, &mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn run_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(cmd.args().with_extras);
    }

    #[test]
    fn lints_with_discovered_config() {
        let temp = setup_project("[tool.lint-python]\nsource = \"src/\"\n");
        let runner = RecordingRunner::default();

        let (result, ui) = run(&temp, RunArgs::default(), &runner);

        assert!(result.success);
        assert_eq!(runner.modules(), vec!["isort", "black", "flake8", "mypy"]);
        assert!(ui.successes().iter().any(|s| s.contains("Linting finished")));
    }

    #[test]
    fn no_config_fails_without_running() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::default();

        let (result, ui) = run(&temp, RunArgs::default(), &runner);

        assert_eq!(result.exit_code, 1);
        assert!(runner.modules().is_empty());
        assert!(ui.has_error("Are you in project root directory?"));
    }

    #[test]
    fn missing_source_fails_without_running() {
        let temp = setup_project("[tool.lint-python]\nuse-mypy = false\n");
        let runner = RecordingRunner::default();
        let args = RunArgs {
            install: true,
            ..Default::default()
        };

        let (result, ui) = run(&temp, args, &runner);

        assert_eq!(result.exit_code, 1);
        assert!(runner.modules().is_empty());
        assert!(ui.has_error("not validated correctly"));
    }

    #[test]
    fn version_mismatch_fails_without_running() {
        let temp = setup_project("[tool.lint-python]\nsource = \".\"\nlint-version = \"999\"\n");
        let runner = RecordingRunner::default();

        let (result, _) = run(&temp, RunArgs::default(), &runner);

        assert!(!result.success);
        assert!(runner.modules().is_empty());
    }

    #[test]
    fn install_runs_pip_before_linters() {
        let temp = setup_project("[tool.lint-python]\nsource = \".\"\n");
        let runner = RecordingRunner::default();
        let args = RunArgs {
            install: true,
            ..Default::default()
        };

        run(&temp, args, &runner);

        assert_eq!(
            runner.modules(),
            vec!["pip", "isort", "black", "flake8", "mypy"]
        );
    }

    #[test]
    fn install_only_skips_linting() {
        let temp = setup_project(
            "[tool.lint-python]\nsource = \".\"\nextra-requirements = \"types-toml\"\n",
        );
        let runner = RecordingRunner::default();
        let args = RunArgs {
            install_only: true,
            with_extras: false,
            ..Default::default()
        };

        let (result, ui) = run(&temp, args, &runner);

        assert!(result.success);
        assert_eq!(runner.modules(), vec!["pip"]);
        assert!(!runner.calls.borrow()[0].1.contains(&"types-toml".to_string()));
        assert!(ui.successes().iter().any(|s| s.contains("installed")));
    }

    #[test]
    fn failing_linter_reports_command() {
        let temp = setup_project("[tool.lint-python]\nsource = \".\"\n");
        let runner = RecordingRunner::failing_on("flake8");

        let (result, ui) = run(&temp, RunArgs::default(), &runner);

        assert_eq!(result.exit_code, 1);
        assert_eq!(runner.modules(), vec!["isort", "black", "flake8"]);
        assert!(ui.has_error("flake8"));
    }

    #[test]
    fn uses_workflow_when_no_project_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(WORKFLOWS_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("lint.yml"),
            format!(
                "jobs:\n  lint:\n    steps:\n      - uses: CERT-Polska/lint-python-action@v{}\n        with:\n          source: app/\n          use-black: false\n",
                VERSION
            ),
        )
        .unwrap();
        let runner = RecordingRunner::default();
        let args = RunArgs {
            check: true,
            ..Default::default()
        };

        let (result, _) = run(&temp, args, &runner);

        assert!(result.success);
        let calls = runner.calls.borrow();
        assert_eq!(calls[0].0, "isort");
        assert_eq!(calls[0].1, vec!["--check", "app/"]);
        assert_eq!(calls[1].0, "flake8");
    }
}
