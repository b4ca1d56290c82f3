//! Output modifiers applied to resolved values.
//!
//! A modifier turns the value found for a tag into the text written back into
//! the template. Modifiers are plain functions looked up by symbol in a
//! [`ModifierRegistry`].

mod error;
pub mod html;
pub mod json;
mod registry;
pub mod uri;

pub use error::ModifierError;
pub use registry::{ModifierFn, ModifierRegistry};

use crate::types::{NodeKind, ValueRef};

/// Symbols of the built-in modifiers.
pub mod symbols {
    /// HTML-escape the display string.
    pub const HTML: &str = "<>";
    /// Strict JSON.
    pub const JSON: &str = "~";
    /// Circular-safe JSON.
    pub const SAFE_JSON: &str = "@";
    /// Circular-safe JSON with HTML-escaped string values.
    pub const ESCAPED_JSON: &str = "$";
    /// Percent-encode the display string as a URI component.
    pub const URI: &str = "%";
}

/// Display string for escaping modifiers. Null and absent values have none.
fn display_string(value: Option<ValueRef<'_>>) -> Result<String, ModifierError> {
    match value {
        None => Err(ModifierError::NotStringifiable {
            kind: NodeKind::Absent,
        }),
        Some(value) if value.kind() == NodeKind::Null => {
            Err(ModifierError::NotStringifiable {
                kind: NodeKind::Null,
            })
        }
        Some(value) => Ok(value.to_display_string()),
    }
}
