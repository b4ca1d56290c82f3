//! The resolve-and-modify pipeline bound to a modifier registry.

use bon::Builder;

use crate::error::ReplaceError;
use crate::modifiers::ModifierRegistry;
use crate::path::resolve_path;
use crate::scanner::{TagPattern, scan};
use crate::types::{Document, ValueRef};

/// Replaces template tags using a fixed set of modifiers.
///
/// A replacer is configuration only: it holds the modifier registry and the
/// text used for paths that resolve to nothing. Every call works on its own
/// state, so one replacer can be shared across threads.
///
/// # Example
///
/// ```
/// use replaces::{Document, ModifierRegistry, Replacer, TagPattern};
/// use serde_json::json;
///
/// let mut modifiers = ModifierRegistry::new();
/// modifiers.register("^", |_, value| {
///     Ok(value.map(|v| v.to_display_string().to_uppercase()).unwrap_or_default())
/// });
/// let replacer = Replacer::builder()
///     .modifiers(modifiers)
///     .absent_text("?")
///     .build();
///
/// let pattern = TagPattern::new(r"\{t(\W+)([^}]+?)\}").unwrap();
/// let doc = Document::from(json!({ "name": "ada" }));
/// let out = replacer.replace("{t^name} {t:missing}", &pattern, &doc).unwrap();
/// assert_eq!(out, "ADA ?");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Replacer {
    /// Modifiers looked up by the symbol captured from each tag.
    #[builder(default)]
    modifiers: ModifierRegistry,

    /// Text written for a tag whose path resolves to nothing and which has no
    /// modifier.
    #[builder(default, into)]
    absent_text: String,
}

impl Replacer {
    /// Create a replacer with the built-in modifiers.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    pub fn absent_text(&self) -> &str {
        &self.absent_text
    }

    /// Replace every tag `pattern` matches in `template` with data from `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if a modifier fails for any tag, e.g. strict JSON on
    /// circular data or HTML escaping of a null value. Nothing is returned for
    /// the tags that succeeded.
    pub fn replace(
        &self,
        template: &str,
        pattern: &TagPattern,
        data: &Document,
    ) -> Result<String, ReplaceError> {
        scan(template, pattern, |modifier, key| {
            self.resolve(modifier, key, data)
        })
    }

    /// Produce the replacement text for a single tag.
    ///
    /// 1. Resolve `key` as a path into `data`
    /// 2. If `modifier` names a registered modifier, return its output as-is
    /// 3. Otherwise return the value's display string
    pub fn resolve(
        &self,
        modifier: &str,
        key: &str,
        data: &Document,
    ) -> Result<String, ReplaceError> {
        let value = resolve_path(data, key);
        tracing::trace!(modifier, key, found = value.is_some(), "resolving tag");

        if let Some(apply) = self.modifiers.get(modifier) {
            return apply(key, value).map_err(|source| ReplaceError::Modifier {
                symbol: modifier.to_string(),
                key: key.to_string(),
                source,
            });
        }

        if !modifier.is_empty() {
            tracing::debug!(modifier, key, "no modifier registered, using display string");
        }
        Ok(value.map_or_else(|| self.absent_text.clone(), ValueRef::to_display_string))
    }
}

impl Default for Replacer {
    fn default() -> Self {
        Self::new()
    }
}
