use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{Document, Node, NodeId, NodeKind};
use crate::MAX_DEPTH;

static NULL_NODE: Node = Node::Null;

/// A borrowed view of one node in a [`Document`].
///
/// This is what path resolution hands to modifiers. It is `Copy`, so it can be
/// passed around freely while the document stays borrowed.
#[derive(Debug, Clone, Copy)]
pub struct ValueRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> ValueRef<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    /// The id of the viewed node. Used as its identity for cycle detection.
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The document this view borrows from.
    pub fn document(self) -> &'a Document {
        self.doc
    }

    /// The viewed node.
    pub fn node(self) -> &'a Node {
        self.doc.node(self.id).unwrap_or(&NULL_NODE)
    }

    pub fn kind(self) -> NodeKind {
        self.node().kind()
    }

    pub fn is_container(self) -> bool {
        self.node().is_container()
    }

    /// Look up `key` on an object. Returns `None` for any other node.
    pub fn get(self, key: &str) -> Option<ValueRef<'a>> {
        match self.node() {
            Node::Object(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, id)| self.child(*id)),
            _ => None,
        }
    }

    /// Look up position `index` on an array. Returns `None` for any other node.
    pub fn index(self, index: usize) -> Option<ValueRef<'a>> {
        match self.node() {
            Node::Array(items) => items.get(index).map(|id| self.child(*id)),
            _ => None,
        }
    }

    /// Key/value pairs of an object, in insertion order. Empty for other nodes.
    pub fn entries(self) -> impl Iterator<Item = (&'a str, ValueRef<'a>)> {
        let entries: &'a [(String, NodeId)] = match self.node() {
            Node::Object(entries) => entries,
            _ => &[],
        };
        entries
            .iter()
            .map(move |(key, id)| (key.as_str(), self.child(*id)))
    }

    /// Elements of an array. Empty for other nodes.
    pub fn items(self) -> impl Iterator<Item = ValueRef<'a>> {
        let items: &'a [NodeId] = match self.node() {
            Node::Array(items) => items,
            _ => &[],
        };
        items.iter().map(move |id| self.child(*id))
    }

    /// The default display string of this value.
    ///
    /// Objects render as `[object Object]` and arrays as their elements joined
    /// by commas. An array that contains itself (directly or through nested
    /// arrays) renders the repeated occurrence as an empty string.
    pub fn to_display_string(self) -> String {
        let mut out = String::new();
        self.write_display(&mut out, &mut Vec::new());
        out
    }

    fn child(self, id: NodeId) -> ValueRef<'a> {
        ValueRef::new(self.doc, id)
    }

    fn write_display(self, out: &mut String, joining: &mut Vec<NodeId>) {
        match self.node() {
            Node::Null => out.push_str("null"),
            Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Node::Number(n) => out.push_str(&n.to_string()),
            Node::Float(f) => out.push_str(&format_float(*f)),
            Node::String(s) => out.push_str(s),
            Node::Object(_) => out.push_str("[object Object]"),
            Node::Array(items) => {
                if joining.contains(&self.id) || joining.len() >= MAX_DEPTH {
                    return;
                }
                joining.push(self.id);
                for (i, id) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    let item = self.child(*id);
                    // Null elements join as empty strings.
                    if !matches!(item.node(), Node::Null) {
                        item.write_display(out, joining);
                    }
                }
                joining.pop();
            }
        }
    }
}

impl Display for ValueRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_display_string())
    }
}

/// Formats a float the way a dynamic language prints numbers: integral values
/// have no fraction, negative zero prints as `0`, infinities are spelled out.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if f == 0.0 {
        "0".to_string()
    } else {
        f.to_string()
    }
}
