use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Argument groups shared by the subcommands.
pub mod args;
/// Routes a parsed [`Cli`] to its handler.
pub mod dispatcher;
pub mod handlers;

use args::{CaptureArgs, CommandArgs, SeedArgs};

/// shellrun: build shell command lines safely, then run them or capture their output.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Shell that interprets the command line (overrides `config.toml`).
    #[arg(long, global = true, value_name = "PATH")]
    pub shell: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub action: Action,
}

/// What to do with the arguments.
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print the escaped command line without running it.
    Format(CommandArgs),
    /// Run the command line, inheriting stdin, stdout and stderr.
    Run(CommandArgs),
    /// Run the command line and print what it wrote to stdout.
    Capture(CaptureArgs),
    /// Print the deterministic integer derived from a string.
    Seed(SeedArgs),
}
