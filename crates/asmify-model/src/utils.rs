//! Text utilities shared by the generation pass.

use std::fmt::Write as _;

/// Strip every character outside `[A-Za-z0-9]`.
///
/// Metadata names may contain arbitrary characters; offending ones are
/// removed, not substituted, so `Foo!` and `Foo#` both sanitize to `Foo`.
///
/// # Examples
/// ```
/// use asmify_model::utils::sanitize_identifier;
/// assert_eq!(sanitize_identifier("Foo!"), "Foo");
/// assert_eq!(sanitize_identifier("<Main>$"), "Main");
/// assert_eq!(sanitize_identifier(".ctor"), "ctor");
/// ```
pub fn sanitize_identifier(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Render a quoted, escaped C# string literal.
///
/// Control characters without a short escape form are written as `\uXXXX`.
///
/// # Examples
/// ```
/// use asmify_model::utils::quote;
/// assert_eq!(quote("abc"), "\"abc\"");
/// assert_eq!(quote("a\"b"), "\"a\\\"b\"");
/// assert_eq!(quote("line\n"), "\"line\\n\"");
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32).unwrap(),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a bool the way C# literals spell it.
pub fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
