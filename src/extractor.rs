//! Event extraction from raw performance log lines
//!
//! Turns log text into structured `EventRecord`s. A line only counts as a
//! completed timed event when it carries all three structural markers in
//! order; everything else is skipped silently, since event lines are
//! expected to coexist with arbitrary unrelated log content.

use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Marker introducing the event segment of a line
const PERFORMANCE_MARKER: &str = "[Performance] ";
/// Delimiter separating the event name from the thread id
const TID_DELIMITER: &str = " with Tid";
/// Phrase introducing the duration text
const DURATION_PHRASE: &str = " has been processed in ";

/// One observed event occurrence: a name and its duration in milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub name: String,
    pub duration_ms: u64,
}

/// Extract event records from an ordered sequence of log lines.
///
/// Records come out in source-line order. Lines missing a structural
/// marker or carrying a malformed duration produce no record and no error.
pub fn extract_events<'a, I>(lines: I) -> Vec<EventRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_line).collect()
}

/// Read a log file and extract all event records from it.
///
/// Read failures degrade to "no events found": a diagnostic goes to stderr
/// and an empty vector comes back. This never returns an error.
pub fn extract_from_file(path: &Path) -> Vec<EventRecord> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let records = extract_events(contents.lines());
            debug!(count = records.len(), "extracted event records");
            records
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read log file");
            eprintln!("Error reading '{}': {}", path.display(), err);
            Vec::new()
        }
    }
}

/// Match one line against the event pattern, short-circuiting on the first
/// missing marker. Returns `None` for anything that is not a completed
/// timed event.
fn parse_line(line: &str) -> Option<EventRecord> {
    let marker_idx = line.find(PERFORMANCE_MARKER)?;
    let segment = &line[marker_idx + PERFORMANCE_MARKER.len()..];

    let tid_idx = segment.find(TID_DELIMITER)?;
    // An all-whitespace name trims to empty but still yields a record
    let name = segment[..tid_idx].trim().to_string();

    let phrase_idx = segment.find(DURATION_PHRASE)?;
    let duration_text = strip_duration_unit(&segment[phrase_idx + DURATION_PHRASE.len()..]);

    match duration_text.parse::<u64>() {
        Ok(duration_ms) => Some(EventRecord { name, duration_ms }),
        Err(_) => {
            trace!(line, "skipping line with malformed duration");
            None
        }
    }
}

/// Remove the `ms` unit (with or without a trailing period) from the end of
/// the duration text and trim surrounding whitespace
fn strip_duration_unit(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix("ms.")
        .or_else(|| text.strip_suffix("ms"))
        .unwrap_or(text)
        .trim()
}
