//! perf-flamegraph CLI
//!
//! Reads sampled call-stack events and writes a d3 flame graph
//! (JSON tree or self-contained HTML page).

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use perf_flamegraph::commands::{execute_report, ReportArgs};
use perf_flamegraph::flamegraph::FlamegraphConfig;
use perf_flamegraph::utils::config::{
    InputFormat, OutputFormat, DEFAULT_TEMPLATE_PATH, STDIO_SENTINEL,
};

/// Create flame graphs from perf samples
#[derive(Parser, Debug)]
#[command(name = "perf-flamegraph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output file format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Output file name, or "-" for standard output
    /// [default: flamegraph.html or stacks.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON indentation
    #[arg(long)]
    indent: Option<usize>,

    /// Path to flamegraph HTML template
    #[arg(long, env = "FLAMEGRAPH_TEMPLATE", default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// Sample events: `perf script` output or JSON lines, "-" for standard input
    #[arg(short, long, default_value = STDIO_SENTINEL)]
    input: PathBuf,

    /// Syntax of the sample events
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    input_format: InputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut config = FlamegraphConfig::new()
        .with_format(cli.format)
        .with_template(cli.template);

    if let Some(output) = cli.output {
        config = config.with_output(output);
    }

    if let Some(indent) = cli.indent {
        config = config.with_indent(indent);
    }

    let args = ReportArgs {
        input: cli.input,
        input_format: cli.input_format,
        flamegraph_config: config,
    };

    execute_report(&args)?;

    Ok(())
}
