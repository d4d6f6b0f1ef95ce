//! Call tree node.
//!
//! The serialized field names (`name`, `libtype`, `value`, `children`) are
//! the ones d3-flame-graph reads, so they are fixed here rather than derived
//! from the Rust field names.

use serde::{Deserialize, Serialize};

/// A frame (or thread) in the call tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Symbol or thread name
    pub name: String,

    /// Origin classification: "kernel" or empty
    #[serde(rename = "libtype")]
    pub origin_tag: String,

    /// Samples whose stack ends at this node
    #[serde(rename = "value")]
    pub count: u64,

    /// Callees, in first-seen order
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_origin(name, "")
    }

    pub fn with_origin(name: impl Into<String>, origin_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin_tag: origin_tag.into(),
            count: 0,
            children: Vec::new(),
        }
    }

    /// Look up a direct child by its merge identity
    pub fn child(&self, name: &str, origin_tag: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.name == name && c.origin_tag == origin_tag)
    }

    /// Sum of counts over this node and all descendants
    pub fn total_count(&self) -> u64 {
        self.count + self.children.iter().map(Node::total_count).sum::<u64>()
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Longest path below this node (a leaf has depth 0)
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
