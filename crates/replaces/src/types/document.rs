use serde_json::Value as JsonValue;

use super::{Node, NodeId, ValueRef};
use crate::error::DataError;

/// Read-only data context for tag substitution.
///
/// A document is an arena of [`Node`]s. Containers refer to their children by
/// [`NodeId`], so the same container can appear under several parents and a
/// container can list one of its own ancestors as a child. Substitution never
/// mutates a document; the mutating methods exist only to build one.
///
/// # Example
///
/// ```
/// use replaces::{Document, Node};
///
/// let mut doc = Document::new();
/// let inner = doc.add(Node::object());
/// let name = doc.add("woop".into());
/// doc.insert(inner, "name", name).unwrap();
/// doc.insert(doc.root(), "inner", inner).unwrap();
/// // Point the inner object back at itself.
/// doc.insert(inner, "me", inner).unwrap();
///
/// assert_eq!(doc.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Creates a document whose root is an empty object.
    pub fn new() -> Self {
        Self::with_root(Node::object())
    }

    /// Creates a document rooted at `node`.
    pub fn with_root(node: Node) -> Self {
        Self {
            nodes: vec![node],
            root: NodeId(0),
        }
    }

    /// Creates a document from a JSON tree, preserving object key order.
    pub fn from_json(value: JsonValue) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.import(value);
        doc
    }

    /// The id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes. A constructed document always has a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Borrow a node as a [`ValueRef`] for traversal.
    pub fn value(&self, id: NodeId) -> Option<ValueRef<'_>> {
        self.nodes.get(id.0).map(|_| ValueRef::new(self, id))
    }

    /// Borrow the root node as a [`ValueRef`].
    pub fn root_value(&self) -> ValueRef<'_> {
        ValueRef::new(self, self.root)
    }

    /// Add a detached node to the arena and return its id.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Add a JSON tree to the arena and return the id of its top node.
    pub fn import(&mut self, value: JsonValue) -> NodeId {
        match value {
            JsonValue::Null => self.add(Node::Null),
            JsonValue::Bool(b) => self.add(Node::Bool(b)),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => self.add(Node::Number(i)),
                None => self.add(Node::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            JsonValue::String(s) => self.add(Node::String(s)),
            JsonValue::Array(items) => {
                let children = items.into_iter().map(|item| self.import(item)).collect();
                self.add(Node::Array(children))
            }
            JsonValue::Object(map) => {
                let entries = map
                    .into_iter()
                    .map(|(key, item)| (key, self.import(item)))
                    .collect();
                self.add(Node::Object(entries))
            }
        }
    }

    /// Set `key` on the object `object` to point at `child`.
    ///
    /// An existing key keeps its position and is repointed.
    pub fn insert(
        &mut self,
        object: NodeId,
        key: impl Into<String>,
        child: NodeId,
    ) -> Result<(), DataError> {
        self.check(child)?;
        let key = key.into();
        match self.nodes.get_mut(object.0) {
            Some(Node::Object(entries)) => {
                if let Some(entry) = entries.iter_mut().find(|(k, _)| *k == key) {
                    entry.1 = child;
                } else {
                    entries.push((key, child));
                }
                Ok(())
            }
            Some(other) => Err(DataError::NotAnObject {
                id: object.0,
                kind: other.kind(),
            }),
            None => Err(DataError::UnknownNode { id: object.0 }),
        }
    }

    /// Append `child` to the array `array`.
    pub fn push(&mut self, array: NodeId, child: NodeId) -> Result<(), DataError> {
        self.check(child)?;
        match self.nodes.get_mut(array.0) {
            Some(Node::Array(items)) => {
                items.push(child);
                Ok(())
            }
            Some(other) => Err(DataError::NotAnArray {
                id: array.0,
                kind: other.kind(),
            }),
            None => Err(DataError::UnknownNode { id: array.0 }),
        }
    }

    fn check(&self, id: NodeId) -> Result<(), DataError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(DataError::UnknownNode { id: id.0 })
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonValue> for Document {
    fn from(value: JsonValue) -> Self {
        Self::from_json(value)
    }
}
