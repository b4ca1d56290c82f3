//! Dotted-path lookup into a [`Document`].

use crate::types::{Document, Node, ValueRef};

/// Resolve `path` against the root of `doc`.
///
/// Resolution order:
/// 1. The whole path as a literal key on the root object, so data that
///    deliberately uses dotted keys (`{"a.b": 1}`) is found first.
/// 2. Segment traversal: split on `.` and descend one segment at a time.
///    Objects are indexed by key, arrays by decimal position.
///
/// Any miss along the way yields `None`: a missing key, an index past the end
/// of an array, a non-numeric segment on an array, or a segment applied to a
/// scalar.
///
/// # Example
///
/// ```
/// use replaces::{Document, resolve_path};
/// use serde_json::json;
///
/// let doc = Document::from(json!({ "x": [{ "y": "a" }, { "y": "b" }] }));
/// let found = resolve_path(&doc, "x.1.y").unwrap();
/// assert_eq!(found.to_display_string(), "b");
/// assert!(resolve_path(&doc, "x.2.y").is_none());
/// ```
pub fn resolve_path<'a>(doc: &'a Document, path: &str) -> Option<ValueRef<'a>> {
    let root = doc.root_value();
    if let Some(found) = root.get(path) {
        return Some(found);
    }
    path.split('.').try_fold(root, step)
}

/// Descend one path segment.
fn step<'a>(current: ValueRef<'a>, segment: &str) -> Option<ValueRef<'a>> {
    match current.node() {
        Node::Object(_) => current.get(segment),
        Node::Array(_) => current.index(parse_index(segment)?),
        Node::Null
        | Node::Bool(_)
        | Node::Number(_)
        | Node::Float(_)
        | Node::String(_) => None,
    }
}

/// Parse a sequence index. Only plain decimal digits count; signs, whitespace
/// and leading zeros (other than `0` itself) do not name an index.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}
