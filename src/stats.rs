//! Per-event duration statistics
//!
//! Groups extracted event records by exact name and summarizes each group
//! as min/max/average/count.

use crate::extractor::EventRecord;
use std::collections::BTreeMap;

/// Aggregate statistics for all records sharing one event name
#[derive(Debug, Clone, PartialEq)]
pub struct EventStats {
    /// Shortest observed duration (milliseconds)
    pub min_ms: u64,
    /// Longest observed duration (milliseconds)
    pub max_ms: u64,
    /// Arithmetic mean of the durations
    pub avg_ms: f64,
    /// Number of records in the group, always positive
    pub count: u64,
}

/// Group records by name and compute per-name statistics.
///
/// The result maps each distinct name to its statistics, sorted by name so
/// that downstream rendering is deterministic. Grouping is case-sensitive.
/// The mean is summed in input order for reproducibility. Empty input
/// yields an empty map.
pub fn aggregate(records: &[EventRecord]) -> BTreeMap<String, EventStats> {
    let mut groups: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.name.clone())
            .or_default()
            .push(record.duration_ms);
    }

    groups
        .into_iter()
        .map(|(name, durations)| {
            let mut min_ms = u64::MAX;
            let mut max_ms = 0;
            let mut sum = 0.0;
            for &duration in &durations {
                min_ms = min_ms.min(duration);
                max_ms = max_ms.max(duration);
                sum += duration as f64;
            }
            let count = durations.len() as u64;
            let stats = EventStats {
                min_ms,
                max_ms,
                avg_ms: sum / count as f64,
                count,
            };
            (name, stats)
        })
        .collect()
}
