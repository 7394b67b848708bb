// src/core/escape.rs

use crate::{
    constants::EMPTY_ARGUMENT,
    core::commons::{wrap_double, wrap_single},
    models::{Arg, Policy},
};
use lazy_static::lazy_static;
use std::{borrow::Cow, collections::HashSet};

lazy_static! {
    /// Tokens that [`Policy::AllowSubstitution`] hands to the shell unquoted, so that
    /// callers can build compound commands such as `make && make install`.
    static ref OPERATOR_TOKENS: HashSet<&'static str> =
        ["&&", "||", "(", ")", "{", "}", ">", ">>", "<", "<<"]
            .into_iter()
            .collect();
}

/// Returns `true` if `token` is one of the shell operators passed through verbatim
/// under [`Policy::AllowSubstitution`].
pub fn is_operator_token(token: &str) -> bool {
    OPERATOR_TOKENS.contains(token)
}

/// Returns `true` if every character of `token` is an ASCII letter, digit, `_`, `.`,
/// `/` or `-`. Such tokens mean the same thing quoted or not.
pub fn is_safe_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'/' | b'-'))
}

impl Policy {
    /// Turns one argument into one shell token under this policy.
    ///
    /// Safe tokens, numbers and (for [`Policy::AllowSubstitution`]) operator tokens
    /// are returned without allocating.
    pub fn escape<'a>(self, arg: Arg<'a>) -> Cow<'a, str> {
        let text = match arg {
            Arg::Number(number) => return Cow::Owned(number),
            Arg::Text(text) => text,
        };

        if text.is_empty() {
            return Cow::Borrowed(EMPTY_ARGUMENT);
        }
        if self == Self::AllowSubstitution && is_operator_token(&text) {
            return text;
        }
        if is_safe_token(&text) {
            return text;
        }

        match self {
            Self::AllowSubstitution => Cow::Owned(wrap_double(&text)),
            Self::NoSubstitution => Cow::Owned(wrap_single(&text)),
        }
    }
}

/// Escapes an argument with [`Policy::AllowSubstitution`].
///
/// ```
/// assert_eq!(shellrun::escape("hello world"), "\"hello world\"");
/// assert_eq!(shellrun::escape("&&"), "&&");
/// ```
pub fn escape<'a>(arg: impl Into<Arg<'a>>) -> Cow<'a, str> {
    Policy::AllowSubstitution.escape(arg.into())
}

/// Escapes an argument with [`Policy::NoSubstitution`].
///
/// ```
/// assert_eq!(shellrun::escape_no_subst("it's"), r"'it'\''s'");
/// ```
pub fn escape_no_subst<'a>(arg: impl Into<Arg<'a>>) -> Cow<'a, str> {
    Policy::NoSubstitution.escape(arg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATORS: [&str; 10] = ["&&", "||", "(", ")", "{", "}", ">", ">>", "<", "<<"];

    #[test]
    fn test_safe_tokens_are_unchanged_under_both_policies() {
        for token in ["ls", "-la", "/usr/local/bin", "file_1.tar.gz", "A-Z", "--", "."] {
            assert_eq!(escape(token), token);
            assert_eq!(escape_no_subst(token), token);
        }
    }

    #[test]
    fn test_safe_tokens_are_borrowed() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert!(matches!(escape_no_subst("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_empty_string_becomes_empty_argument_token() {
        assert_eq!(escape(""), "''");
        assert_eq!(escape_no_subst(""), "''");
        assert_eq!(escape(String::new()), "''");
    }

    #[test]
    fn test_numbers_are_trusted() {
        assert_eq!(escape(42), "42");
        assert_eq!(escape_no_subst(-3i32), "-3");
        assert_eq!(escape(0.5f64), "0.5");
    }

    #[test]
    fn test_operator_tokens_pass_through_with_substitution() {
        for op in OPERATORS {
            assert_eq!(escape(op), op, "operator {op} should be left bare");
        }
    }

    #[test]
    fn test_operator_tokens_are_quoted_without_substitution() {
        assert_eq!(escape_no_subst("&&"), "'&&'");
        assert_eq!(escape_no_subst(">>"), "'>>'");
        for op in OPERATORS {
            assert_eq!(shlex::split(&escape_no_subst(op)), Some(vec![op.to_string()]));
        }
    }

    #[test]
    fn test_near_operators_are_quoted() {
        assert_eq!(escape("|"), "\"|\"");
        assert_eq!(escape("&&&"), "\"&&&\"");
        assert_eq!(escape(">file"), "\">file\"");
    }

    #[test]
    fn test_double_quote_policy_escapes_embedded_quotes() {
        assert_eq!(escape("hello world"), "\"hello world\"");
        assert_eq!(escape(r#"a "b" c"#), r#""a \"b\" c""#);
        assert_eq!(escape("it's"), "\"it's\"");
    }

    #[test]
    fn test_double_quote_policy_keeps_expansions_live() {
        assert_eq!(escape("$HOME"), "\"$HOME\"");
        assert_eq!(escape("`date`"), "\"`date`\"");
    }

    #[test]
    fn test_trailing_backslash_cannot_escape_closing_quote() {
        let token = escape(r"dir\");
        assert_eq!(token, r#""dir\\""#);
        assert_eq!(shlex::split(&token), Some(vec![r"dir\".to_string()]));
    }

    #[test]
    fn test_single_quote_concrete_example() {
        assert_eq!(escape_no_subst("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_single_quote_policy_round_trips_through_shell_parsing() {
        let samples = [
            "it's",
            "'",
            "''",
            "'leading",
            "trailing'",
            "a'b'c",
            "$(rm -rf /)",
            "`id`; echo pwned",
            "tab\there",
            "new\nline",
            "back\\slash",
            "\"double\"",
            "&& || ; | > <",
            "ünïcødé ✓",
        ];
        for sample in samples {
            let token = escape_no_subst(sample);
            assert_eq!(
                shlex::split(&token),
                Some(vec![sample.to_string()]),
                "token {token} did not parse back to {sample:?}"
            );
        }
    }

    #[test]
    fn test_double_quote_policy_round_trips_without_expansions() {
        for sample in ["hello world", "say \"hi\"", "a\\b", "semi;colon", "it's"] {
            let token = escape(sample);
            assert_eq!(shlex::split(&token), Some(vec![sample.to_string()]));
        }
    }

    #[test]
    fn test_safe_token_classification() {
        assert!(is_safe_token("abc_DEF-123./"));
        assert!(!is_safe_token(""));
        assert!(!is_safe_token("a b"));
        assert!(!is_safe_token("a'b"));
        assert!(!is_safe_token("a\"b"));
        assert!(!is_safe_token("é"));
        assert!(!is_safe_token("~"));
    }

    #[test]
    fn test_operator_membership() {
        for op in OPERATORS {
            assert!(is_operator_token(op));
        }
        assert!(!is_operator_token("|"));
        assert!(!is_operator_token(";"));
        assert!(!is_operator_token("&"));
    }
}
