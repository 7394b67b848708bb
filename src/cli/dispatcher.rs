// src/cli/dispatcher.rs

use anyhow::Result;

use crate::cli::{Action, Cli, handlers};

/// Routes a parsed command line to its handler.
///
/// Only the actions that execute something resolve a shell, so `format` and `seed`
/// keep working with a broken `config.toml`.
pub fn dispatch(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    match cli.action {
        Action::Format(args) => handlers::format::handle(&args),
        Action::Seed(args) => handlers::seed::handle(&args),
        Action::Run(args) => {
            let shell = handlers::commons::resolve_shell(cli.shell)?;
            handlers::run::handle(&args, &shell)
        }
        Action::Capture(args) => {
            let shell = handlers::commons::resolve_shell(cli.shell)?;
            handlers::capture::handle(&args, &shell)
        }
    }
}
