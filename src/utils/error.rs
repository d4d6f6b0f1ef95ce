//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading sample events
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON event at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid perf script output at line {line}: {message}")]
    InvalidFormat { line: usize, message: String },
}

/// Errors related to the HTML flame graph template
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error(
        "Flame Graph template '{}' does not exist. Please install the d3-flame-graph \
         package or specify an existing flame graph template using the --template parameter.",
        .0.display()
    )]
    Missing(PathBuf),

    #[error("Error reading template file '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while encoding the call tree
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Serialized JSON is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error writing output file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors raised at trace end
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
