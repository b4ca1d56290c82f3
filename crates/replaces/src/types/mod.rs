mod document;
mod node;
mod value_ref;

pub use document::Document;
pub use node::{Node, NodeId, NodeKind};
pub use value_ref::ValueRef;
