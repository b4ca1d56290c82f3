//! Process-wide default replacer.
//!
//! Backs the crate-level [`replace`] function so callers that only need the
//! built-in modifiers do not have to construct a [`Replacer`].

use std::sync::LazyLock;

use crate::error::ReplaceError;
use crate::replacer::Replacer;
use crate::scanner::TagPattern;
use crate::types::Document;

static DEFAULT_REPLACER: LazyLock<Replacer> = LazyLock::new(Replacer::new);

/// The shared replacer with the built-in modifiers and default settings.
pub fn default_replacer() -> &'static Replacer {
    &DEFAULT_REPLACER
}

/// Replace tags in `template` using the default replacer.
///
/// # Example
///
/// ```
/// use replaces::{Document, TagPattern, replace};
/// use serde_json::json;
///
/// let pattern = TagPattern::new(r"\{test(\W+)([^}]+?)\}").unwrap();
/// let doc = Document::from(json!({ "html": "<div>" }));
/// let out = replace("{test<>html}, {test:html}", &pattern, &doc).unwrap();
/// assert_eq!(out, "&lt;div&gt;, <div>");
/// ```
pub fn replace(
    template: &str,
    pattern: &TagPattern,
    data: &Document,
) -> Result<String, ReplaceError> {
    DEFAULT_REPLACER.replace(template, pattern, data)
}
