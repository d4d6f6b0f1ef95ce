//! Raw-count summary of a finished call tree.
//!
//! Logged at trace end so a user can tell at a glance whether the
//! capture contained what they expected.

use super::node::Node;

/// Counts describing a call tree
///
/// **Public** - returned from trace_end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Samples merged into the tree
    pub total_samples: u64,

    /// Nodes excluding the synthetic root
    pub node_count: usize,

    /// Distinct thread/process names (children of root)
    pub thread_count: usize,

    /// Deepest frame below root
    pub max_depth: usize,
}

impl TreeStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        format!(
            "Samples: {} | Nodes: {} | Threads: {} | Max depth: {}",
            self.total_samples, self.node_count, self.thread_count, self.max_depth
        )
    }
}

/// Calculate tree statistics from the root node
pub fn calculate_tree_stats(root: &Node) -> TreeStats {
    TreeStats {
        total_samples: root.total_count(),
        node_count: root.node_count() - 1,
        thread_count: root.children.len(),
        max_depth: root.depth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_stats() {
        let stats = calculate_tree_stats(&Node::new("root"));
        assert_eq!(stats, TreeStats::default());
    }

    #[test]
    fn test_tree_stats() {
        let mut root = Node::new("root");
        let mut bash = Node::new("bash");
        let mut main = Node::new("main");
        main.count = 4;
        bash.count = 1;
        bash.children.push(main);
        root.children.push(bash);
        root.children.push(Node::new("perf"));

        let stats = calculate_tree_stats(&root);
        assert_eq!(stats.total_samples, 5);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.thread_count, 2);
        assert_eq!(stats.max_depth, 2);
        assert!(stats.summary().contains("Samples: 5"));
    }
}
