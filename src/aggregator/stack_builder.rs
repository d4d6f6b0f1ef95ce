//! Merge sampled call chains into a weighted call tree.
//!
//! Every event contributes one sample to the path
//! `root -> comm -> outermost caller -> ... -> innermost frame`.
//! Paths sharing a prefix share nodes, so the count at each node is the
//! number of samples whose stack ends exactly there.

use super::metrics::{calculate_tree_stats, TreeStats};
use super::node::Node;
use crate::flamegraph::{render, FlamegraphConfig};
use crate::output::write_output;
use crate::parser::SampleEvent;
use crate::utils::config::{KERNEL_DSO, KERNEL_LIBTYPE, ROOT_NAME, UNKNOWN_SYMBOL};
use crate::utils::error::ReportError;
use log::{debug, info};

/// Accumulates events into a call tree
///
/// **Public** - driven by the report command, one event at a time
#[derive(Debug, Clone)]
pub struct StackAggregator {
    root: Node,
    events: u64,
}

impl Default for StackAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl StackAggregator {
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT_NAME),
            events: 0,
        }
    }

    /// The tree built so far
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of events merged so far
    pub fn event_count(&self) -> u64 {
        self.events
    }

    /// Find the child of `parent` matching `(name, origin)`, creating it if needed
    ///
    /// **Public** - the single lookup/insert step of the merge
    ///
    /// A missing name becomes `[unknown]`; frames from `[kernel.kallsyms]`
    /// are tagged `kernel`. New children are appended, so `children` stays in
    /// first-seen order.
    pub fn find_or_create_child<'a>(
        parent: &'a mut Node,
        name: Option<&str>,
        dso: Option<&str>,
    ) -> &'a mut Node {
        let origin_tag = if dso == Some(KERNEL_DSO) {
            KERNEL_LIBTYPE
        } else {
            ""
        };
        let name = name.unwrap_or(UNKNOWN_SYMBOL);

        let idx = match parent
            .children
            .iter()
            .position(|c| c.name == name && c.origin_tag == origin_tag)
        {
            Some(idx) => idx,
            None => {
                parent.children.push(Node::with_origin(name, origin_tag));
                parent.children.len() - 1
            }
        };

        &mut parent.children[idx]
    }

    /// Merge one sample into the tree
    ///
    /// **Public** - called once per sampled event
    ///
    /// # Algorithm
    /// 1. Descend from root into the `comm` node
    /// 2. Walk the call chain outermost caller first (the chain itself is
    ///    innermost first), or use the top-level `symbol`/`dso` when the
    ///    event has no call chain
    /// 3. Add one sample to the node reached
    pub fn process_event(&mut self, event: &SampleEvent) {
        let mut node = Self::find_or_create_child(&mut self.root, event.comm.as_deref(), None);

        match &event.callchain {
            Some(callchain) => {
                for entry in callchain.iter().rev() {
                    node = Self::find_or_create_child(node, entry.symbol_name(), entry.dso.as_deref());
                }
            }
            None => {
                node = Self::find_or_create_child(node, event.symbol.as_deref(), event.dso.as_deref());
            }
        }

        node.count += 1;
        self.events += 1;
    }

    /// Render the finished tree and write it out
    ///
    /// **Public** - called exactly once, after the last event
    ///
    /// # Errors
    /// * `ReportError::Render` - JSON encoding failed or the template is unreadable
    /// * `ReportError::Output` - the destination cannot be written
    pub fn trace_end(&self, config: &FlamegraphConfig) -> Result<TreeStats, ReportError> {
        debug!("Trace ended after {} events", self.events);

        let content = render(&self.root, config)?;
        write_output(&content, config.output_path())?;

        let stats = calculate_tree_stats(&self.root);
        info!("Call tree: {}", stats.summary());

        Ok(stats)
    }
}
