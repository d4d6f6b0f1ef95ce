//! Report command implementation.
//!
//! The report command:
//! 1. Checks the HTML template before touching the input
//! 2. Streams sample events into the call tree
//! 3. Renders and writes the flame graph at end of trace

use crate::aggregator::{StackAggregator, TreeStats};
use crate::flamegraph::{check_template, FlamegraphConfig};
use crate::parser::event_stream;
use crate::utils::config::{InputFormat, STDIO_SENTINEL};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Event input file, or `-` for standard input
    pub input: PathBuf,

    /// Syntax of the event input
    pub input_format: InputFormat,

    /// Output format, destination and template
    pub flamegraph_config: FlamegraphConfig,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(STDIO_SENTINEL),
            input_format: InputFormat::Auto,
            flamegraph_config: FlamegraphConfig::default(),
        }
    }
}

/// Validate report arguments
///
/// **Public** - must succeed before any event is read
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    check_template(&args.flamegraph_config)?;
    Ok(())
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing HTML template
/// * Unreadable or malformed input
/// * Unreadable template or unwritable output at trace end
pub fn execute_report(args: &ReportArgs) -> Result<TreeStats> {
    let start_time = Instant::now();

    validate_args(args)?;

    let reader = open_input(&args.input)
        .with_context(|| format!("Failed to open input {}", args.input.display()))?;

    info!("Reading sample events from: {}", describe_input(&args.input));
    let events = event_stream(reader, args.input_format).context("Failed to read input")?;

    let mut aggregator = StackAggregator::new();
    for event in events {
        let event = event.context("Failed to parse sample event")?;
        aggregator.process_event(&event);
    }
    debug!("Processed {} events", aggregator.event_count());

    let stats = aggregator
        .trace_end(&args.flamegraph_config)
        .context("Failed to write flame graph")?;

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(stats)
}

/// Open the event input
///
/// **Private** - `-` means standard input
fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path == Path::new(STDIO_SENTINEL) {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn describe_input(path: &Path) -> String {
    if path == Path::new(STDIO_SENTINEL) {
        "standard input".to_string()
    } else {
        path.display().to_string()
    }
}
