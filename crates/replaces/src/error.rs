//! Error types for building documents, compiling patterns, and replacing tags.

use thiserror::Error;

use crate::modifiers::ModifierError;
use crate::types::NodeKind;

/// An error that aborted a replace call.
///
/// Resolution misses and unknown modifier symbols are not errors; only a
/// failing modifier aborts substitution, and no partial result is returned.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// A registered modifier failed for a tag.
    #[error("modifier '{symbol}' failed for key '{key}': {source}")]
    Modifier {
        symbol: String,
        key: String,
        #[source]
        source: ModifierError,
    },
}

/// Errors from compiling a tag pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regular expression did not compile.
    #[error("invalid tag pattern: {0}")]
    Regex(#[from] regex::Error),

    /// The pattern does not expose the modifier and key captures.
    #[error("tag pattern needs 2 capture groups (modifier, key), found {found}")]
    MissingCaptures { found: usize },
}

/// Errors from building a [`Document`](crate::Document).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// The id was not issued by this document.
    #[error("node {id} does not exist in this document")]
    UnknownNode { id: usize },

    /// Tried to set a key on something that is not an object.
    #[error("node {id} is {kind}, not an object")]
    NotAnObject { id: usize, kind: NodeKind },

    /// Tried to append to something that is not an array.
    #[error("node {id} is {kind}, not an array")]
    NotAnArray { id: usize, kind: NodeKind },
}
