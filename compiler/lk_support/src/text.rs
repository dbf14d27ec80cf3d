//! Small text helpers for grammar-level literals.

/// Strip one leading backslash from an escaped character literal.
///
/// `\"` becomes `"`, `\\` becomes `\`, and anything else is returned as is.
#[inline]
pub fn unescape(text: &str) -> &str {
    text.strip_prefix('\\').unwrap_or(text)
}
