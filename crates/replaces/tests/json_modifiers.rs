//! Tests for JSON serialization and cycle detection.

use insta::assert_snapshot;
use replaces::modifiers::json::{
    CyclePolicy, JsonOptions, escaped_json_modifier, json_modifier, safe_json_modifier, stringify,
    stringify_safe, stringify_with,
};
use replaces::{Document, MAX_DEPTH, ModifierError, Node, NodeId};
use serde_json::json;

/// `{ a: { b: { back: <a> } } }`
fn deep_cycle() -> Document {
    let mut doc = Document::new();
    let a = doc.add(Node::object());
    let b = doc.add(Node::object());
    doc.insert(doc.root(), "a", a).unwrap();
    doc.insert(a, "b", b).unwrap();
    doc.insert(b, "back", a).unwrap();
    doc
}

/// `{ x: <shared>, y: <shared> }` with `shared = { v: 1 }`
fn shared_siblings() -> (Document, NodeId) {
    let mut doc = Document::new();
    let shared = doc.add(Node::object());
    let v = doc.add(1.into());
    doc.insert(shared, "v", v).unwrap();
    doc.insert(doc.root(), "x", shared).unwrap();
    doc.insert(doc.root(), "y", shared).unwrap();
    (doc, shared)
}

#[test]
fn strict_json_serializes_every_node_kind() {
    let doc = Document::from(json!({
        "s": "a \"quoted\" line\n",
        "n": -3,
        "f": 2.5,
        "whole": 4.0,
        "t": true,
        "nil": null,
        "list": [1, "two", { "three": 3 }]
    }));
    assert_snapshot!(
        stringify(doc.root_value()).unwrap(),
        @r#"{"s":"a \"quoted\" line\n","n":-3,"f":2.5,"whole":4,"t":true,"nil":null,"list":[1,"two",{"three":3}]}"#
    );
}

#[test]
fn non_finite_floats_serialize_as_null() {
    let mut doc = Document::new();
    let nan = doc.add(Node::Float(f64::NAN));
    let inf = doc.add(Node::Float(f64::INFINITY));
    doc.insert(doc.root(), "nan", nan).unwrap();
    doc.insert(doc.root(), "inf", inf).unwrap();
    assert_eq!(stringify(doc.root_value()).unwrap(), r#"{"nan":null,"inf":null}"#);
}

#[test]
fn cycle_marker_names_the_repeated_ancestor() {
    let doc = deep_cycle();
    assert_snapshot!(
        stringify_safe(doc.root_value()).unwrap(),
        @r#"{"a":{"b":{"back":"[Circular ~.a]"}}}"#
    );
}

#[test]
fn cycle_to_the_root_uses_the_short_marker() {
    let mut doc = Document::new();
    doc.insert(doc.root(), "me", doc.root()).unwrap();
    assert_eq!(
        stringify_safe(doc.root_value()).unwrap(),
        r#"{"me":"[Circular ~]"}"#
    );
}

#[test]
fn array_cycles_record_index_segments() {
    let mut doc = Document::new();
    let list = doc.add(Node::array());
    let inner = doc.add(Node::object());
    doc.insert(doc.root(), "list", list).unwrap();
    doc.push(list, inner).unwrap();
    doc.insert(inner, "up", list).unwrap();
    doc.push(list, list).unwrap();
    assert_eq!(
        stringify_safe(doc.root_value()).unwrap(),
        r#"{"list":[{"up":"[Circular ~.list]"},"[Circular ~.list]"]}"#
    );
}

#[test]
fn strict_json_reports_the_cycle_path() {
    let doc = deep_cycle();
    match stringify(doc.root_value()) {
        Err(ModifierError::Circular { path }) => assert_eq!(path, "~.a"),
        other => panic!("expected circular error, got {other:?}"),
    }
}

#[test]
fn shared_siblings_are_not_circular() {
    let (doc, _) = shared_siblings();
    let expected = r#"{"x":{"v":1},"y":{"v":1}}"#;
    assert_eq!(stringify(doc.root_value()).unwrap(), expected);
    assert_eq!(stringify_safe(doc.root_value()).unwrap(), expected);
}

#[test]
fn serialization_can_start_below_the_root() {
    let (doc, shared) = shared_siblings();
    let value = doc.value(shared).unwrap();
    assert_eq!(stringify(value).unwrap(), r#"{"v":1}"#);
}

#[test]
fn escaping_applies_to_values_not_keys() {
    let doc = Document::from(json!({ "<k>": "<v>", "list": ["a&b"] }));
    let escaped = stringify_with(
        doc.root_value(),
        JsonOptions {
            cycles: CyclePolicy::Fail,
            escape_html: true,
        },
    )
    .unwrap();
    assert_eq!(escaped, r#"{"<k>":"&lt;v&gt;","list":["a&amp;b"]}"#);
}

#[test]
fn json_modifiers_render_absent_values_as_empty() {
    assert_eq!(json_modifier("k", None).unwrap(), "");
    assert_eq!(safe_json_modifier("k", None).unwrap(), "");
    assert_eq!(escaped_json_modifier("k", None).unwrap(), "");
}

#[test]
fn json_modifiers_serialize_scalars() {
    let doc = Document::from(json!({ "s": "it's", "n": 7 }));
    let s = doc.root_value().get("s");
    let n = doc.root_value().get("n");
    assert_eq!(json_modifier("s", s).unwrap(), r#""it's""#);
    assert_eq!(escaped_json_modifier("s", s).unwrap(), r#""it&#39;s""#);
    assert_eq!(safe_json_modifier("n", n).unwrap(), "7");
}

#[test]
fn escaped_json_falls_back_on_cycles() {
    let doc = deep_cycle();
    assert_eq!(
        escaped_json_modifier("a", Some(doc.root_value())).unwrap(),
        r#"{"a":{"b":{"back":"[Circular ~.a]"}}}"#
    );
}

#[test]
fn nesting_past_the_limit_is_an_error() {
    let mut doc = Document::new();
    let mut parent = doc.root();
    for _ in 0..=MAX_DEPTH {
        let child = doc.add(Node::object());
        doc.insert(parent, "c", child).unwrap();
        parent = child;
    }
    assert!(matches!(
        stringify_safe(doc.root_value()),
        Err(ModifierError::MaxDepthExceeded)
    ));
}
