//! Position resolver: anchors finding spans in a structured document.

pub mod document;
#[allow(clippy::module_inception)]
pub mod resolver;

pub use document::{DocumentSnapshot, NodeRef, TextNode};
pub use resolver::{Anchor, PositionResolver, TextSpan};
