//! Tests for the modifier registry and the escaping modifiers.

use replaces::modifiers::html::{self, ENTITIES, html_modifier};
use replaces::modifiers::symbols;
use replaces::modifiers::uri::{encode_component, uri_modifier};
use replaces::{
    Document, ModifierError, ModifierRegistry, NodeKind, Replacer, ValueRef, default_replacer,
};
use serde_json::json;

// =============================================================================
// Registry
// =============================================================================

#[test]
fn default_registry_has_builtin_symbols() {
    let registry = ModifierRegistry::new();
    let found: Vec<&str> = registry.symbols().collect();
    assert_eq!(found, vec!["$", "%", "<>", "@", "~"]);
    for symbol in [
        symbols::HTML,
        symbols::JSON,
        symbols::SAFE_JSON,
        symbols::ESCAPED_JSON,
        symbols::URI,
    ] {
        assert!(registry.contains(symbol), "missing {symbol}");
    }
}

#[test]
fn empty_registry_has_nothing() {
    let registry = ModifierRegistry::empty();
    assert_eq!(registry.symbols().count(), 0);
    assert!(registry.get(symbols::HTML).is_none());
}

#[test]
fn register_returns_the_replaced_modifier() {
    fn shout(_: &str, _: Option<ValueRef<'_>>) -> Result<String, ModifierError> {
        Ok("!".to_string())
    }

    let mut registry = ModifierRegistry::new();
    assert!(registry.register("!", shout).is_none());
    assert!(registry.register(symbols::HTML, shout).is_some());
    let apply = registry.get(symbols::HTML).unwrap();
    assert_eq!(apply("k", None).unwrap(), "!");
}

#[test]
fn default_replacer_uses_default_registry() {
    let replacer = default_replacer();
    assert_eq!(
        replacer.modifiers().symbols().collect::<Vec<_>>(),
        Replacer::new().modifiers().symbols().collect::<Vec<_>>()
    );
    assert_eq!(replacer.absent_text(), "");
}

// =============================================================================
// HTML escaping
// =============================================================================

#[test]
fn each_entity_is_produced_once() {
    for (ch, entity) in ENTITIES {
        assert_eq!(html::escape(&ch.to_string()), entity);
    }
    assert_eq!(
        html::escape(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn html_modifier_escapes_display_strings() {
    let doc = Document::from(json!({ "n": 5, "list": ["<a>", "<b>"], "obj": {} }));
    let root = doc.root_value();
    assert_eq!(html_modifier("n", root.get("n")).unwrap(), "5");
    assert_eq!(
        html_modifier("list", root.get("list")).unwrap(),
        "&lt;a&gt;,&lt;b&gt;"
    );
    assert_eq!(html_modifier("obj", root.get("obj")).unwrap(), "[object Object]");
}

#[test]
fn html_modifier_rejects_null_and_absent() {
    let doc = Document::from(json!({ "nil": null }));
    assert!(matches!(
        html_modifier("nil", doc.root_value().get("nil")),
        Err(ModifierError::NotStringifiable {
            kind: NodeKind::Null
        })
    ));
    assert!(matches!(
        html_modifier("gone", None),
        Err(ModifierError::NotStringifiable {
            kind: NodeKind::Absent
        })
    ));
}

// =============================================================================
// URI encoding
// =============================================================================

#[test]
fn uri_encoding_uses_percent_twenty_for_spaces() {
    assert_eq!(encode_component("hello world"), "hello%20world");
    assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
}

#[test]
fn uri_modifier_encodes_display_strings() {
    let doc = Document::from(json!({ "q": "x=1&y=2", "t": true }));
    let root = doc.root_value();
    assert_eq!(uri_modifier("q", root.get("q")).unwrap(), "x%3D1%26y%3D2");
    assert_eq!(uri_modifier("t", root.get("t")).unwrap(), "true");
    assert!(uri_modifier("gone", None).is_err());
}
