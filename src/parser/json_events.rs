//! Reader for newline-delimited JSON sample events.
//!
//! Each non-blank line holds one event object, e.g.
//! `{"comm": "bash", "callchain": [{"sym": {"name": "read"}, "dso": "[kernel.kallsyms]"}]}`

use super::schema::SampleEvent;
use crate::utils::error::ParseError;
use std::io::BufRead;

/// Streaming iterator over JSON events
pub struct JsonEventReader<R> {
    reader: R,
    line_num: usize,
    buf: String,
}

impl<R: BufRead> JsonEventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for JsonEventReader<R> {
    type Item = Result<SampleEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(ParseError::Io(e))),
            }
            self.line_num += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(line).map_err(|source| ParseError::Json {
                    line: self.line_num,
                    source,
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_event_per_line() {
        let input = "{\"comm\": \"a\"}\n\n{\"comm\": \"b\", \"callchain\": []}\n";
        let events: Vec<SampleEvent> = JsonEventReader::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].comm.as_deref(), Some("a"));
        assert_eq!(events[1].callchain, Some(vec![]));
    }

    #[test]
    fn test_invalid_line_reports_line_number() {
        let input = "{\"comm\": \"a\"}\n\nnot json\n";
        let results: Vec<_> = JsonEventReader::new(Cursor::new(input)).collect();

        assert_eq!(results.len(), 2);
        match &results[1] {
            Err(ParseError::Json { line, .. }) => assert_eq!(*line, 3),
            other => panic!("expected JSON error, got {:?}", other),
        }
    }
}
