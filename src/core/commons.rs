// src/core/commons.rs

/// Wraps a string in double quotes, backslash-escaping the characters that would
/// otherwise end the quoted region early (`"` and `\`).
///
/// `$` and backticks are left alone, so expansions inside the value still run.
pub fn wrap_double(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Wraps a string in single quotes. An embedded `'` closes the quoted region,
/// emits a backslash-escaped quote and reopens it: `it's` becomes `'it'\''s'`.
pub fn wrap_single(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
