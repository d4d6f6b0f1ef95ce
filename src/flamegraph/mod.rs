//! Flame graph rendering for the d3-flame-graph viewer.
//!
//! This module turns the aggregated call tree into JSON, optionally
//! embedded in the interactive HTML page.

pub mod generator;

// Re-export main types
pub use generator::{
    check_template,
    render,
    render_html,
    render_json,
    FlamegraphConfig,
};
