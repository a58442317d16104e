//! Running the linters and their installation.
//!
//! Every tool is started as `<python> -m <module>` so the copy installed in
//! the active virtualenv is used. A tool missing from that environment fails
//! loudly instead of silently resolving to a global install.

pub mod install;
pub mod lint;

pub use install::{install_command_args, perform_install};
pub use lint::{lint_command_args, perform_linting};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{execute_checked, CommandLine, CommandOptions};

/// Interpreter used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Something able to run a Python module with arguments.
pub trait ModuleRunner {
    /// Run `module` with `args`, failing if it exits unsuccessfully.
    fn run_module(&self, module: &str, args: &[String]) -> Result<()>;
}

/// Runs modules through a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonRunner {
    interpreter: OsString,
    cwd: Option<PathBuf>,
}

impl PythonRunner {
    pub fn new(interpreter: impl Into<OsString>) -> Self {
        Self {
            interpreter: interpreter.into(),
            cwd: None,
        }
    }

    /// Run modules from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn command_line(&self, module: &str, args: &[String]) -> CommandLine {
        CommandLine::new(self.interpreter.clone())
            .arg("-m")
            .arg(module)
            .args(args.iter().cloned())
    }
}

impl Default for PythonRunner {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl ModuleRunner for PythonRunner {
    fn run_module(&self, module: &str, args: &[String]) -> Result<()> {
        let command = self.command_line(module, args);
        tracing::debug!("Running command {}", command);

        let options = CommandOptions {
            cwd: self.cwd.clone(),
        };
        let result = execute_checked(&command, &options)?;
        tracing::debug!("{} finished in {:?}", module, result.duration);
        Ok(())
    }
}
