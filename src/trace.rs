use std::cell::RefCell;
use std::fmt;
use std::io::{BufRead, Write};

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::listener::{EventKind, Listener, SegmentOptions};

#[derive(Debug)]
pub struct TraceError;

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Event trace error")
    }
}

impl std::error::Error for TraceError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    pub event: EventKind,
    pub options: SegmentOptions,
}

/// On-disk shape of a record; the event name stays a plain string so
/// names outside the protocol are reported as such.
#[derive(Serialize, Deserialize)]
struct TraceLine {
    event: String,
    p1: Point,
    p2: Point,
}

/// A listener that remembers every event it is sent, in order.
#[derive(Default)]
pub struct EventTrace {
    records: RefCell<Vec<TraceRecord>>,
}

impl EventTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<TraceRecord> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> Result<(), Report<TraceError>> {
        for record in self.records.borrow().iter() {
            let line = TraceLine {
                event: record.event.name().to_string(),
                p1: record.options.p1,
                p2: record.options.p2,
            };
            serde_json::to_writer(&mut writer, &line).change_context(TraceError)?;
            writer.write_all(b"\n").change_context(TraceError)?;
        }
        writer.flush().change_context(TraceError)
    }
}

impl Listener for EventTrace {
    fn notify(&self, event: EventKind, options: &SegmentOptions) {
        self.records.borrow_mut().push(TraceRecord { event, options: *options });
    }
}

/// Parse a JSON-lines trace. Blank lines are ignored; an unknown event
/// name is an error.
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, Report<TraceError>> {
    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.change_context(TraceError)?;
        if line.trim().is_empty() {
            continue;
        }
        let raw: TraceLine = serde_json::from_str(&line)
            .change_context(TraceError)
            .attach_printable_lazy(|| format!("at line {}", line_num + 1))?;
        let event = raw
            .event
            .parse::<EventKind>()
            .change_context(TraceError)
            .attach_printable_lazy(|| format!("at line {}", line_num + 1))?;
        records.push(TraceRecord { event, options: SegmentOptions::new(raw.p1, raw.p2) });
    }
    Ok(records)
}
