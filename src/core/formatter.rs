// src/core/formatter.rs

use crate::models::{Arg, Policy};

const SEPARATOR: char = ' ';

/// Escapes every argument under `policy` and joins the tokens with single spaces,
/// preserving their order.
pub fn format_with<'a, I>(policy: Policy, args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    let mut line = String::new();
    for (position, arg) in args.into_iter().enumerate() {
        if position > 0 {
            line.push(SEPARATOR);
        }
        line.push_str(&policy.escape(arg.into()));
    }
    line
}

/// Builds a command line with [`Policy::AllowSubstitution`].
///
/// ```
/// assert_eq!(shellrun::format_command(["echo", "hello world"]), r#"echo "hello world""#);
/// ```
pub fn format_command<'a, I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    format_with(Policy::AllowSubstitution, args)
}

/// Builds a command line with [`Policy::NoSubstitution`].
pub fn format_command_no_subst<'a, I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Arg<'a>>,
{
    format_with(Policy::NoSubstitution, args)
}

/// Formats a command line from arguments of mixed types under
/// [`Policy::AllowSubstitution`].
///
/// ```
/// let line = shellrun::command_line!("head", "-n", 5, "my notes.txt");
/// assert_eq!(line, r#"head -n 5 "my notes.txt""#);
/// ```
#[macro_export]
macro_rules! command_line {
    ($($arg:expr),+ $(,)?) => {
        $crate::core::formatter::format_with(
            $crate::models::Policy::AllowSubstitution,
            [$($crate::models::Arg::from($arg)),+],
        )
    };
}

/// Formats a command line from arguments of mixed types under
/// [`Policy::NoSubstitution`].
///
/// ```
/// let line = shellrun::command_line_no_subst!("grep", "-c", "it's", 3);
/// assert_eq!(line, r"grep -c 'it'\''s' 3");
/// ```
#[macro_export]
macro_rules! command_line_no_subst {
    ($($arg:expr),+ $(,)?) => {
        $crate::core::formatter::format_with(
            $crate::models::Policy::NoSubstitution,
            [$($crate::models::Arg::from($arg)),+],
        )
    };
}
