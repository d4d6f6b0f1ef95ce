//! Aggregation of sampled events into a call tree.
//!
//! This module provides:
//! - The call tree node type
//! - The streaming merge of call chains into the tree
//! - Raw-count statistics of the finished tree

pub mod metrics;
pub mod node;
pub mod stack_builder;

// Re-export main types and functions
pub use metrics::{calculate_tree_stats, TreeStats};
pub use node::Node;
pub use stack_builder::StackAggregator;
