//! Fixed-width tabular report rendering
//!
//! Purely presentational: renders an already-aggregated statistics map as a
//! plain-text table. Rendering never fails and is byte-stable for identical
//! input.

use crate::stats::EventStats;
use std::collections::BTreeMap;

/// Longest event name rendered without truncation
const NAME_MAX: usize = 38;
/// Truncation marker appended to over-long names
const ELLIPSIS: &str = "...";

/// Render the statistics table: one header line, then one row per event in
/// map iteration order. An empty map yields header-only output.
pub fn render(stats: &BTreeMap<String, EventStats>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<40} {:>10} {:>10} {:>10} {:>15}\n",
        "Event", "Min", "Max", "Average", "Count"
    ));

    for (name, s) in stats {
        out.push_str(&format!(
            "{:<40} {:>10} {:>10} {:>10} {:>15}\n",
            truncate_name(name),
            s.min_ms,
            s.max_ms,
            round_average(s.avg_ms),
            s.count
        ));
    }

    out
}

/// Write the rendered report to stdout
pub fn print(stats: &BTreeMap<String, EventStats>) {
    print!("{}", render(stats));
}

/// Round the average for display; ties round away from zero
fn round_average(avg_ms: f64) -> u64 {
    avg_ms.round() as u64
}

/// Truncate a name longer than 38 characters to its first 35 characters
/// plus `...`, so the rendered field never exceeds 38 characters
fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_MAX {
        name.to_string()
    } else {
        let head: String = name.chars().take(NAME_MAX - ELLIPSIS.len()).collect();
        format!("{head}{ELLIPSIS}")
    }
}
