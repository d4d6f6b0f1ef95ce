//! Configuration and constants for the CLI.

use clap::ValueEnum;

/// Name of the synthetic node every tree hangs off
pub const ROOT_NAME: &str = "root";

/// Label used when a frame (or event) carries no symbol name
pub const UNKNOWN_SYMBOL: &str = "[unknown]";

/// DSO name perf reports for kernel frames
pub const KERNEL_DSO: &str = "[kernel.kallsyms]";

/// `libtype` value for frames originating in the kernel
pub const KERNEL_LIBTYPE: &str = "kernel";

/// Marker token in the d3-flame-graph template replaced by the JSON tree
pub const FLAMEGRAPH_MARKER: &str = "/** @flamegraph_params **/";

/// Where the d3-flame-graph package installs its template
pub const DEFAULT_TEMPLATE_PATH: &str = "/usr/share/d3-flame-graph/template.html";

pub const DEFAULT_HTML_OUTPUT: &str = "flamegraph.html";
pub const DEFAULT_JSON_OUTPUT: &str = "stacks.json";

/// Path value meaning standard input/output
pub const STDIO_SENTINEL: &str = "-";

/// Output serialization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bare JSON call tree
    Json,

    /// JSON call tree embedded in the d3-flame-graph HTML template
    #[default]
    Html,
}

impl OutputFormat {
    /// Default output file name used when no destination is given
    pub fn default_output(self) -> &'static str {
        match self {
            OutputFormat::Json => DEFAULT_JSON_OUTPUT,
            OutputFormat::Html => DEFAULT_HTML_OUTPUT,
        }
    }
}

/// Syntax of the sample event input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Detect from the first non-whitespace byte
    #[default]
    Auto,

    /// One JSON event object per line
    Json,

    /// Text output of `perf script`
    Perf,
}
