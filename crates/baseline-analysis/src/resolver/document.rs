//! Snapshot of a document's text-bearing nodes, as handed over by the host.

use serde::{Deserialize, Serialize};

use crate::matcher::offsets::char_len;

/// Opaque handle to a host document node. Assigned by the host; only
/// meaningful to the renderer that produced the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeRef(pub u64);

/// One text-bearing node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub node_ref: NodeRef,
    pub text: String,
}

impl TextNode {
    pub fn new(node_ref: NodeRef, text: impl Into<String>) -> Self {
        Self {
            node_ref,
            text: text.into(),
        }
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}

/// Text nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub nodes: Vec<TextNode>,
}

impl DocumentSnapshot {
    pub fn new(nodes: Vec<TextNode>) -> Self {
        Self { nodes }
    }

    /// Snapshot with sequential node refs starting at 0.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nodes = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| TextNode::new(NodeRef(i as u64), t))
            .collect();
        Self { nodes }
    }

    /// The flattened text the matcher sees.
    pub fn flatten(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }

    /// Total length in chars.
    pub fn char_len(&self) -> usize {
        self.nodes.iter().map(TextNode::char_len).sum()
    }
}
