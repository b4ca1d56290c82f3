use std::fmt::{Display, Formatter, Result as FmtResult};

/// Index of a node inside a [`Document`](super::Document) arena.
///
/// Ids are only meaningful for the document that issued them. Containers hold
/// ids rather than owned children, which is what allows a structure to refer
/// back to one of its own ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in its document's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single value stored in a [`Document`](super::Document).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An explicit null.
    Null,

    /// A boolean.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// An ordered sequence, addressed by numeric path segments.
    Array(Vec<NodeId>),

    /// A mapping from keys to children, in insertion order.
    Object(Vec<(String, NodeId)>),
}

impl Node {
    /// Creates an empty object node.
    pub fn object() -> Self {
        Node::Object(Vec::new())
    }

    /// Creates an empty array node.
    pub fn array() -> Self {
        Node::Array(Vec::new())
    }

    /// The kind of this node, without its payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Number(_) => NodeKind::Number,
            Node::Float(_) => NodeKind::Float,
            Node::String(_) => NodeKind::String,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// Whether this node holds children.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Array(_) | Node::Object(_))
    }

    /// Get this node as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this node as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this node as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// The variant of a [`Node`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    Float,
    String,
    Array,
    Object,
    /// The lookup produced no value at all.
    Absent,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Number | NodeKind::Float => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
            NodeKind::Absent => "absent value",
        };
        f.write_str(name)
    }
}

// From implementations for common scalar types

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Number(i64::from(n))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n)
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Node::Number(i64::from(n))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Float(n)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}
