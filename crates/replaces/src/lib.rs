//! Template tag substitution.
//!
//! Tags are found by a caller-supplied [`TagPattern`] that captures a modifier
//! symbol and a key path. Each key is looked up in a [`Document`], passed
//! through the modifier registered for the symbol (if any), and the result is
//! spliced back into the template in a single left-to-right pass.

mod error;
mod global;
pub mod modifiers;
mod path;
mod replacer;
pub mod scanner;
pub mod types;

pub use error::{DataError, PatternError, ReplaceError};
pub use global::{default_replacer, replace};
pub use modifiers::{ModifierError, ModifierFn, ModifierRegistry};
pub use path::resolve_path;
pub use replacer::Replacer;
pub use scanner::{MatchMode, TagPattern};
pub use types::{Document, Node, NodeId, NodeKind, ValueRef};

/// Deepest container nesting that serialization and display will descend into.
pub const MAX_DEPTH: usize = 128;
