//! JSON serialization of document values, with optional cycle handling.
//!
//! Serialization walks the document through [`serde::Serialize`] and keeps an
//! ownership stack: the containers on the current path from the serialized
//! root down to the node being written. A container that is already on the
//! stack is a cycle. Only ancestors count, so the same container reached
//! through two sibling branches is written out twice.

use std::cell::RefCell;

use serde::ser::{Error as SerError, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{ModifierError, html};
use crate::MAX_DEPTH;
use crate::types::{Node, NodeId, ValueRef};

/// What to do when a container is found among its own ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Abort serialization with [`ModifierError::Circular`].
    Fail,
    /// Write a `"[Circular ~...]"` marker string in place of the container.
    Sentinel,
}

/// Options for [`stringify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub cycles: CyclePolicy,
    /// Run every string leaf (and cycle marker) through HTML escaping.
    pub escape_html: bool,
}

/// Serialize `value` as JSON, failing on circular structures.
pub fn stringify(value: ValueRef<'_>) -> Result<String, ModifierError> {
    stringify_with(
        value,
        JsonOptions {
            cycles: CyclePolicy::Fail,
            escape_html: false,
        },
    )
}

/// Serialize `value` as JSON, replacing circular references with a marker.
pub fn stringify_safe(value: ValueRef<'_>) -> Result<String, ModifierError> {
    stringify_with(
        value,
        JsonOptions {
            cycles: CyclePolicy::Sentinel,
            escape_html: false,
        },
    )
}

/// Serialize `value` as JSON with the given options.
pub fn stringify_with(value: ValueRef<'_>, options: JsonOptions) -> Result<String, ModifierError> {
    let state = Serializing {
        options,
        stack: RefCell::new(Ownership::default()),
        failure: RefCell::new(None),
    };
    let view = JsonView {
        value,
        segment: Segment::Root,
        state: &state,
    };
    serde_json::to_string(&view)
        .map_err(|err| state.failure.take().unwrap_or_else(|| ModifierError::Json(err)))
}

/// Modifier: strict JSON. Circular input is an error.
pub fn json_modifier(_key: &str, value: Option<ValueRef<'_>>) -> Result<String, ModifierError> {
    value.map_or_else(|| Ok(String::new()), stringify)
}

/// Modifier: circular-safe JSON.
pub fn safe_json_modifier(_key: &str, value: Option<ValueRef<'_>>) -> Result<String, ModifierError> {
    value.map_or_else(|| Ok(String::new()), stringify_safe)
}

/// Modifier: circular-safe JSON whose string values are HTML-escaped.
///
/// Strict serialization is tried first; if it fails the circular-safe
/// serializer runs with the same string escaping.
pub fn escaped_json_modifier(
    key: &str,
    value: Option<ValueRef<'_>>,
) -> Result<String, ModifierError> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let strict = JsonOptions {
        cycles: CyclePolicy::Fail,
        escape_html: true,
    };
    stringify_with(value, strict).or_else(|err| {
        tracing::debug!(key, error = %err, "strict serialization failed, retrying circular-safe");
        stringify_with(
            value,
            JsonOptions {
                cycles: CyclePolicy::Sentinel,
                ..strict
            },
        )
    })
}

/// How a node was reached from its parent.
#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// Containers on the current serialization path, outermost first.
#[derive(Debug, Default)]
struct Ownership {
    ids: Vec<NodeId>,
    /// Path segment used to enter the container at the same position.
    segments: Vec<String>,
}

impl Ownership {
    fn position(&self, id: NodeId) -> Option<usize> {
        self.ids.iter().position(|owner| *owner == id)
    }

    fn depth(&self) -> usize {
        self.ids.len()
    }

    fn push(&mut self, id: NodeId, segment: Segment<'_>) {
        self.ids.push(id);
        self.segments.push(match segment {
            Segment::Root => String::new(),
            Segment::Key(key) => key.to_string(),
            Segment::Index(i) => i.to_string(),
        });
    }

    fn pop(&mut self) {
        self.ids.pop();
        self.segments.pop();
    }

    /// Path from the serialization root to the container at `position`.
    fn path_to(&self, position: usize) -> String {
        match self.segments.get(1..=position) {
            Some(keys) if !keys.is_empty() => format!("~.{}", keys.join(".")),
            _ => "~".to_string(),
        }
    }
}

/// Call-local state shared by every [`JsonView`] of one serialization.
struct Serializing {
    options: JsonOptions,
    stack: RefCell<Ownership>,
    /// The structured reason for an abort, recovered after `serde_json` returns.
    failure: RefCell<Option<ModifierError>>,
}

impl Serializing {
    fn serialize_text<S: Serializer>(&self, text: &str, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.escape_html {
            serializer.serialize_str(&html::escape(text))
        } else {
            serializer.serialize_str(text)
        }
    }

    fn fail<E: SerError>(&self, error: ModifierError) -> E {
        let err = E::custom(&error);
        self.failure.replace(Some(error));
        err
    }
}

struct JsonView<'s, 'a> {
    value: ValueRef<'a>,
    segment: Segment<'a>,
    state: &'s Serializing,
}

impl<'s, 'a> JsonView<'s, 'a> {
    fn child(&self, value: ValueRef<'a>, segment: Segment<'a>) -> JsonView<'s, 'a> {
        JsonView {
            value,
            segment,
            state: self.state,
        }
    }

    fn serialize_container<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let state = self.state;
        let id = self.value.id();
        let repeated = {
            let stack = state.stack.borrow();
            stack.position(id).map(|position| stack.path_to(position))
        };
        if let Some(path) = repeated {
            return match state.options.cycles {
                CyclePolicy::Sentinel => {
                    state.serialize_text(&format!("[Circular {path}]"), serializer)
                }
                CyclePolicy::Fail => Err(state.fail(ModifierError::Circular { path })),
            };
        }
        if state.stack.borrow().depth() >= MAX_DEPTH {
            return Err(state.fail(ModifierError::MaxDepthExceeded));
        }

        state.stack.borrow_mut().push(id, self.segment);
        let result = self.serialize_members(serializer);
        state.stack.borrow_mut().pop();
        result
    }

    fn serialize_members<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.node() {
            Node::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for (i, item) in self.value.items().enumerate() {
                    seq.serialize_element(&self.child(item, Segment::Index(i)))?;
                }
                seq.end()
            }
            Node::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in self.value.entries() {
                    map.serialize_entry(key, &self.child(item, Segment::Key(key)))?;
                }
                map.end()
            }
            Node::Null
            | Node::Bool(_)
            | Node::Number(_)
            | Node::Float(_)
            | Node::String(_) => self.serialize(serializer),
        }
    }
}

impl Serialize for JsonView<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.node() {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => serializer.serialize_i64(*n),
            Node::Float(f) => serialize_float(*f, serializer),
            Node::String(s) => self.state.serialize_text(s, serializer),
            Node::Array(_) | Node::Object(_) => self.serialize_container(serializer),
        }
    }
}

/// Largest magnitude below which every integer is exactly representable.
const SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral floats are written without a fraction; non-finite floats as null.
fn serialize_float<S: Serializer>(f: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !f.is_finite() {
        serializer.serialize_unit()
    } else if f.fract() == 0.0 && f.abs() < SAFE_INTEGER {
        serializer.serialize_i64(f as i64)
    } else {
        serializer.serialize_f64(f)
    }
}
