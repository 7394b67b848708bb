// src/cli/handlers/commons.rs

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::system::{
    config::{self, ShellConfig},
    shell::Shell,
};

/// Builds the [`Shell`] for this invocation: `config.toml` (or defaults), with the
/// shell binary optionally replaced by `--shell`.
pub fn resolve_shell(shell_override: Option<PathBuf>) -> Result<Shell> {
    let config_path = config::get_config_path()?;
    let mut shell_config = config::load_config_from(&config_path).with_context(|| {
        format!("Could not load configuration from '{}'", config_path.display())
    })?;

    if let Some(shell) = shell_override {
        log::debug!("Using shell '{}' from the command line.", shell.display());
        shell_config = ShellConfig { shell, ..shell_config }
            .validated()
            .context("Invalid --shell value")?;
    }

    Ok(Shell::new(shell_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_override_replaces_configured_shell() {
        // Only meaningful when no user config breaks loading on this machine.
        if let Ok(shell) = resolve_shell(Some(PathBuf::from("/bin/bash"))) {
            assert_eq!(shell.program(), Path::new("/bin/bash"));
        }
    }
}
