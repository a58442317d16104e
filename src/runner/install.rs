//! Installing the linters with pip.

use crate::config::{LintConfig, Linter};
use crate::error::Result;

use super::ModuleRunner;

/// Arguments for `python -m pip`.
pub fn install_command_args(config: &LintConfig, with_extras: bool) -> Vec<String> {
    let mut args = vec!["install".to_string(), "-U".to_string()];
    args.extend(Linter::ALL.iter().map(|l| l.module().to_string()));
    if with_extras {
        args.extend(config.extra_requirements.iter().cloned());
    }
    args
}

/// Install or upgrade the linters, plus extra requirements when asked.
///
/// All linters are installed even when some are disabled, so toggling a
/// flag never needs a reinstall.
pub fn perform_install(
    config: &LintConfig,
    with_extras: bool,
    runner: &dyn ModuleRunner,
) -> Result<()> {
    let args = install_command_args(config, with_extras);
    tracing::info!("Installing {}", args[2..].join(" "));
    runner.run_module("pip", &args)
}
