//! Sample event parsing.
//!
//! This module handles:
//! - The explicit event record handed to the aggregator
//! - Reading newline-delimited JSON events
//! - Reading `perf script` text output
//! - Picking a reader for an input stream

pub mod json_events;
pub mod perf_script;
pub mod schema;

// Re-export main types
pub use json_events::JsonEventReader;
pub use perf_script::PerfScriptReader;
pub use schema::{CallchainEntry, SampleEvent, Symbol};

use crate::utils::config::InputFormat;
use crate::utils::error::ParseError;
use log::debug;
use std::io::BufRead;

/// Iterator over events of either supported syntax
pub type EventStream<'a> = Box<dyn Iterator<Item = Result<SampleEvent, ParseError>> + 'a>;

/// Build an event stream for `reader`
///
/// With [`InputFormat::Auto`] the first non-whitespace byte decides: `{`
/// means JSON events, anything else `perf script` text.
pub fn event_stream<'a, R: BufRead + 'a>(
    mut reader: R,
    format: InputFormat,
) -> Result<EventStream<'a>, ParseError> {
    let format = match format {
        InputFormat::Auto => detect_format(&mut reader)?,
        other => other,
    };
    debug!("Reading events as {:?}", format);

    Ok(match format {
        InputFormat::Json => Box::new(JsonEventReader::new(reader)),
        _ => Box::new(PerfScriptReader::new(reader)),
    })
}

/// Peek at the input without consuming anything but leading whitespace
fn detect_format<R: BufRead>(reader: &mut R) -> Result<InputFormat, ParseError> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(InputFormat::Perf);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) => {
                let format = if buf[pos] == b'{' {
                    InputFormat::Json
                } else {
                    InputFormat::Perf
                };
                reader.consume(pos);
                return Ok(format);
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
