//! perf-flamegraph
//!
//! Builds flame graph call trees from sampled perf call-stack events.
//!
//! Each sample's call chain is merged into a tree rooted at a synthetic
//! `root` node, one level per thread name and then one per frame from
//! outermost caller to innermost callee. The finished tree is written as
//! the JSON document d3-flame-graph reads, optionally embedded in its
//! interactive HTML template.
//!
//! ## Getting Started
//!
//! ```bash
//! perf record -a -g -F 99 sleep 60
//! perf script | perf-flamegraph -o flamegraph.html
//! ```

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod parser;
pub mod utils;
