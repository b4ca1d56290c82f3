//! HTML entity escaping.

use super::{ModifierError, display_string};
use crate::types::ValueRef;

/// Characters escaped for embedding in markup, with their named entities.
pub const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

/// Replace each of `& < > " '` in `text` with its entity.
///
/// The input is scanned once, so entities produced here are never escaped
/// again. Everything else, slashes included, passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ENTITIES.iter().find(|(special, _)| *special == ch) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

/// Modifier: HTML-escape the value's display string.
pub fn html_modifier(_key: &str, value: Option<ValueRef<'_>>) -> Result<String, ModifierError> {
    Ok(escape(&display_string(value)?))
}
