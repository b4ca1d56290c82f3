//! Registry mapping tag modifier symbols to modifier functions.

use std::collections::BTreeMap;

use super::{ModifierError, html, json, symbols, uri};
use crate::types::ValueRef;

/// Modifier function signature.
///
/// Takes:
/// - `key`: The path written in the tag
/// - `value`: The resolved value, or `None` if the path missed
///
/// Returns the text that replaces the tag, used as-is.
pub type ModifierFn = fn(&str, Option<ValueRef<'_>>) -> Result<String, ModifierError>;

/// Registry for modifier functions, keyed by symbol.
///
/// A registry is filled before it is handed to a
/// [`Replacer`](crate::Replacer); the replacer only reads from it.
#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    modifiers: BTreeMap<String, ModifierFn>,
}

impl ModifierRegistry {
    /// Create a registry seeded with the built-in modifiers.
    ///
    /// | Symbol | Modifier |
    /// |--------|----------|
    /// | `<>`   | HTML-escape |
    /// | `~`    | strict JSON |
    /// | `@`    | circular-safe JSON |
    /// | `$`    | circular-safe JSON with HTML-escaped strings |
    /// | `%`    | URI component encoding |
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(symbols::HTML, html::html_modifier);
        registry.register(symbols::JSON, json::json_modifier);
        registry.register(symbols::SAFE_JSON, json::safe_json_modifier);
        registry.register(symbols::ESCAPED_JSON, json::escaped_json_modifier);
        registry.register(symbols::URI, uri::uri_modifier);
        registry
    }

    /// Create a registry with no modifiers at all.
    pub fn empty() -> Self {
        Self {
            modifiers: BTreeMap::new(),
        }
    }

    /// Register `modifier` under `symbol`, returning the one it replaced.
    pub fn register(
        &mut self,
        symbol: impl Into<String>,
        modifier: ModifierFn,
    ) -> Option<ModifierFn> {
        self.modifiers.insert(symbol.into(), modifier)
    }

    /// Get a modifier by symbol.
    pub fn get(&self, symbol: &str) -> Option<ModifierFn> {
        self.modifiers.get(symbol).copied()
    }

    /// Check if a modifier is registered for `symbol`.
    pub fn contains(&self, symbol: &str) -> bool {
        self.modifiers.contains_key(symbol)
    }

    /// Registered symbols, sorted.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}
