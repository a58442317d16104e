//! Running the enabled linters.

use crate::config::{LintConfig, Linter};
use crate::error::Result;

use super::ModuleRunner;

/// Arguments passed to `linter`. The source path always comes last.
pub fn lint_command_args(linter: Linter, config: &LintConfig, check_only: bool) -> Vec<String> {
    let mut args = Vec::new();
    if check_only && linter.supports_check() {
        args.push("--check".to_string());
    }
    args.push(config.source.clone());
    args
}

/// Run every enabled linter in order, stopping at the first failure.
pub fn perform_linting(
    config: &LintConfig,
    check_only: bool,
    runner: &dyn ModuleRunner,
) -> Result<()> {
    for linter in Linter::ALL {
        if !config.is_enabled(linter) {
            tracing::debug!("Skipping {} (disabled)", linter.module());
            continue;
        }

        tracing::info!("Linting with {}", linter.module());
        runner.run_module(linter.module(), &lint_command_args(linter, config, check_only))?;
    }
    Ok(())
}
