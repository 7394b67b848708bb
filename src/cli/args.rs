// src/cli/args.rs
use crate::models::Policy;
use clap::Args;

/// Arguments shared by every subcommand that builds a command line.
#[derive(Args, Debug, Default)]
pub struct CommandArgs {
    /// Quote every argument literally (single quotes, no operator passthrough).
    #[arg(long, short)]
    pub literal: bool,

    /// The program and its arguments. Operators such as `&&` or `>` are kept as
    /// shell syntax unless `--literal` is given.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl CommandArgs {
    /// The quoting policy selected by `--literal`.
    pub fn policy(&self) -> Policy {
        if self.literal {
            Policy::NoSubstitution
        } else {
            Policy::AllowSubstitution
        }
    }
}

/// Arguments of `shellrun capture`.
#[derive(Args, Debug, Default)]
pub struct CaptureArgs {
    /// Strip leading and trailing whitespace from the captured output.
    #[arg(long)]
    pub trim: bool,

    /// The command line to capture.
    #[command(flatten)]
    pub command: CommandArgs,
}

/// Arguments of `shellrun seed`.
#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// The text to derive the seed from.
    pub text: String,
}
