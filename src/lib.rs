//! Build shell command lines from untrusted arguments, then run them or capture
//! their output.
//!
//! ```no_run
//! let greeting = shellrun::capture(["echo", "hello world"])?;
//! assert_eq!(greeting, "hello world\n");
//!
//! // Single quotes: nothing in the arguments is interpreted by the shell.
//! shellrun::run_no_subst(["touch", "it's $HOME.txt"])?;
//! # Ok::<(), shellrun::ExecutionError>(())
//! ```

/// Command-line front end of the `shellrun` binary.
pub mod cli;
/// Descriptor numbers, defaults and file names.
pub mod constants;
pub mod core;
/// Argument and quoting-policy types.
pub mod models;
pub mod system;

pub use crate::core::escape::{escape, escape_no_subst};
pub use crate::core::formatter::{format_command, format_command_no_subst, format_with};
pub use crate::models::{Arg, Policy};
pub use crate::system::executor::ExecutionError;
pub use crate::system::shell::Shell;

/// Formats `args` with [`Policy::AllowSubstitution`] and runs them through the
/// default shell, inheriting stdio.
pub fn run<'a, I>(args: I) -> Result<(), ExecutionError>
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    Shell::default().run(Policy::AllowSubstitution, args)
}

/// Formats `args` with [`Policy::NoSubstitution`] and runs them through the
/// default shell, inheriting stdio.
pub fn run_no_subst<'a, I>(args: I) -> Result<(), ExecutionError>
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    Shell::default().run(Policy::NoSubstitution, args)
}

/// Formats `args` with [`Policy::AllowSubstitution`], runs them through the
/// default shell and returns their standard output.
pub fn capture<'a, I>(args: I) -> Result<String, ExecutionError>
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    Shell::default().capture(Policy::AllowSubstitution, args)
}

/// Formats `args` with [`Policy::NoSubstitution`], runs them through the
/// default shell and returns their standard output.
pub fn capture_no_subst<'a, I>(args: I) -> Result<String, ExecutionError>
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    Shell::default().capture(Policy::NoSubstitution, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_capture() {
        assert_eq!(capture(["echo", "hello world"]).unwrap(), "hello world\n");
        assert_eq!(capture(["true", "&&", "echo", "ok"]).unwrap(), "ok\n");
        assert_eq!(capture_no_subst(["printf", "%s", "it's"]).unwrap(), "it's");
    }

    #[test]
    fn test_top_level_run() {
        assert!(run(["true", "||", "false"]).is_ok());
        assert!(run_no_subst(["test", "a b", "=", "a b"]).is_ok());
        let err = run_no_subst(["test", "a", "=", "b"]).unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.command(), "test a '=' b");
        assert!(err.to_string().contains("test a '=' b"));
    }
}
