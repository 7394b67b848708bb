// src/models.rs

use std::borrow::Cow;
use std::fmt;

/// Selects how arguments are quoted when they become shell tokens.
///
/// The two policies are never mixed within one command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Wrap unsafe arguments in double quotes. Parameter expansion, `$(...)` and
    /// backticks inside them still run, and operator tokens such as `&&` or `>`
    /// pass through untouched so callers can splice shell syntax into a command.
    #[default]
    AllowSubstitution,
    /// Wrap unsafe arguments in single quotes. Every argument reaches the command
    /// as literal data, operator tokens included.
    NoSubstitution,
}

/// A single caller-supplied argument: either text, or a number that has already
/// been rendered in decimal form.
///
/// Numbers are trusted and never quoted. Build values with `From`:
///
/// ```
/// use shellrun::Arg;
///
/// assert_eq!(Arg::from("ls").as_str(), "ls");
/// assert_eq!(Arg::from(-42).as_str(), "-42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    /// Arbitrary, possibly untrusted text.
    Text(Cow<'a, str>),
    /// The decimal form of a numeric argument.
    Number(String),
}

impl Arg<'_> {
    /// Returns the raw, unescaped content of the argument.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number,
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

macro_rules! impl_number_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Self::Number(value.to_string())
                }
            }
        )*
    };
}

impl_number_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
