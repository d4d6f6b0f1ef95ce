//! Output writers for rendered flame graphs.

pub mod writer;

// Re-export main functions
pub use writer::write_output;
