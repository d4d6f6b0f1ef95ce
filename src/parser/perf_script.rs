//! Reader for `perf script` text output.
//!
//! Converts each sample block into a [`SampleEvent`] so text captures feed
//! the same aggregation path as JSON events.
//!
//! Sample block layout:
//! ```text
//! bash  1234 [000] 12345.678901:     250000 cpu-clock:
//! 	ffffffff81234567 native_write_msr+0x6 ([kernel.kallsyms])
//! 	401234 main+0x54 (/usr/bin/bash)
//!
//! ```
//! Without `-g` the single sampled frame follows the event name on the
//! header line itself.

use super::schema::{CallchainEntry, SampleEvent};
use crate::utils::config::UNKNOWN_SYMBOL;
use crate::utils::error::ParseError;
use log::debug;
use std::io::BufRead;

/// Streaming iterator over perf script samples
pub struct PerfScriptReader<R> {
    reader: R,
    line_num: usize,
    buf: String,
    pending: Option<SampleEvent>,
}

impl<R: BufRead> PerfScriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buf: String::new(),
            pending: None,
        }
    }
}

impl<R: BufRead> Iterator for PerfScriptReader<R> {
    type Item = Result<SampleEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return self.pending.take().map(Ok),
                Ok(_) => {}
                Err(e) => return Some(Err(ParseError::Io(e))),
            }
            self.line_num += 1;

            let line = self.buf.trim_end_matches(['\n', '\r']);
            let trimmed = line.trim();

            // Blank line closes the current sample
            if trimmed.is_empty() || trimmed.starts_with('#') {
                if let Some(sample) = self.pending.take() {
                    return Some(Ok(sample));
                }
                continue;
            }

            // Headers are padded when the command name is short, so the
            // line's shape decides, not its indentation
            match parse_sample_header(trimmed) {
                Ok(header) => {
                    if let Some(previous) = self.pending.replace(header) {
                        return Some(Ok(previous));
                    }
                }
                Err(message) if !line.starts_with(char::is_whitespace) => {
                    return Some(Err(ParseError::InvalidFormat {
                        line: self.line_num,
                        message,
                    }))
                }
                Err(_) => match self.pending.as_mut() {
                    Some(sample) => {
                        if let Some(frame) = parse_frame(trimmed) {
                            sample.callchain.get_or_insert_with(Vec::new).push(frame);
                        }
                    }
                    None => debug!("Skipping frame line {} outside of a sample", self.line_num),
                },
            }
        }
    }
}

/// Parse a sample header line
///
/// Format: `comm pid[/tid] [cpu] timestamp: [period] event: [ip sym+off (dso)]`
///
/// The command name may contain spaces, digits and colons (`kworker/0:1`,
/// `Web Content 3`), so the pid is located relative to the `[cpu]` or
/// timestamp token and the command name is everything before it.
fn parse_sample_header(line: &str) -> Result<SampleEvent, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let anchor_idx = tokens
        .iter()
        .skip(2)
        .position(|t| is_cpu(t) || is_timestamp(t))
        .map(|i| i + 2)
        .ok_or_else(|| format!("no cpu or timestamp field in sample header '{}'", line))?;

    let pid_idx = anchor_idx - 1;
    if !is_pid(tokens[pid_idx]) {
        return Err(format!("no pid before '{}' in sample header '{}'", tokens[anchor_idx], line));
    }

    let mut sample = SampleEvent::new(tokens[..pid_idx].join(" "));

    // The event name is the first colon-terminated token that is not a timestamp
    let event_idx = tokens[anchor_idx..]
        .iter()
        .position(|t| t.ends_with(':') && !is_timestamp(t))
        .map(|i| i + anchor_idx);

    let inline_frame = event_idx.and_then(|idx| parse_frame(&tokens[idx + 1..].join(" ")));
    match inline_frame {
        Some(frame) => {
            sample.symbol = frame.symbol_name().map(str::to_string);
            sample.dso = frame.dso;
        }
        // Call chain frames (if any) follow on their own lines
        None => sample.callchain = Some(Vec::new()),
    }

    Ok(sample)
}

/// Parse a frame: `ip sym+off (dso)`
///
/// Returns `None` for an empty line.
fn parse_frame(text: &str) -> Option<CallchainEntry> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (before_dso, dso) = match text.rfind(" (") {
        Some(pos) if text.ends_with(')') => (
            text[..pos].trim(),
            Some(&text[pos + 2..text.len() - 1]),
        ),
        _ => (text, None),
    };

    let symbol_part = match before_dso.split_once(char::is_whitespace) {
        Some((ip, rest)) if is_hex(ip) => rest.trim(),
        None if is_hex(before_dso) => "",
        _ => before_dso,
    };

    let symbol = strip_offset(symbol_part);
    let name = if symbol.is_empty() || symbol == UNKNOWN_SYMBOL {
        None
    } else {
        Some(symbol)
    };

    Some(CallchainEntry::new(name, dso))
}

/// `main+0x54` -> `main`
fn strip_offset(symbol: &str) -> &str {
    match symbol.rfind("+0x") {
        Some(pos) if symbol[pos + 3..].chars().all(|c| c.is_ascii_hexdigit()) => &symbol[..pos],
        _ => symbol,
    }
}

fn is_pid(token: &str) -> bool {
    let mut parts = token.splitn(2, '/');
    parts.all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn is_timestamp(token: &str) -> bool {
    match token.strip_suffix(':') {
        Some(ts) => !ts.is_empty() && ts.chars().all(|c| c.is_ascii_digit() || c == '.'),
        None => false,
    }
}

/// `[001]`
fn is_cpu(token: &str) -> bool {
    token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .map_or(false, |t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
}

fn is_hex(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit())
}
