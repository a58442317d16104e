//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::runner::DEFAULT_INTERPRETER;

/// lint-python - Lint the source code.
#[derive(Debug, Parser)]
#[command(name = "lint-python")]
#[command(author, version, about = "Lint the source code.", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the discovered configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for linting (the default action).
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Perform only check and don't modify the files
    #[arg(long)]
    pub check: bool,

    /// Install required linters before linting
    #[arg(long)]
    pub install: bool,

    /// Install required linters but don't perform linting
    #[arg(long)]
    pub install_only: bool,

    /// Omit extra-requirements during installation
    #[arg(long = "no-extras", action = clap::ArgAction::SetFalse)]
    pub with_extras: bool,

    /// Python interpreter used to run the linters
    #[arg(long, env = "LINT_PYTHON_INTERPRETER", default_value = DEFAULT_INTERPRETER)]
    pub python: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            check: false,
            install: false,
            install_only: false,
            with_extras: true,
            python: PathBuf::from(DEFAULT_INTERPRETER),
        }
    }
}

impl RunArgs {
    /// Whether linters are installed before anything else.
    pub fn installs(&self) -> bool {
        self.install || self.install_only
    }

    /// Whether the linters run at all.
    pub fn lints(&self) -> bool {
        !self.install_only
    }
}

/// Which source the `config` command reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigSource {
    /// pyproject.toml, then workflow files
    #[default]
    Auto,
    /// pyproject.toml only
    Project,
    /// Workflow files only; malformed files are errors
    Workflow,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration source to read
    #[arg(long = "from", value_enum, default_value_t = ConfigSource::Auto)]
    pub source: ConfigSource,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
