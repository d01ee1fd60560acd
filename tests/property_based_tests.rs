//! Property-based tests for the extraction and aggregation pipeline
//!
//! Core properties tested:
//! 1. Extraction never panics and produces at most one record per line
//! 2. Well-formed event lines round-trip through extraction
//! 3. Aggregation invariants: min <= avg <= max, counts add up
//! 4. Rendering is deterministic

use perfstat::extractor::{extract_events, EventRecord};
use perfstat::report::render;
use perfstat::stats::aggregate;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_extraction_never_panics(line in ".*") {
        // Property: arbitrary input lines never panic and yield at most
        // one record per line
        let records = extract_events([line.as_str()]);
        prop_assert!(records.len() <= 1);
    }

    #[test]
    fn prop_well_formed_line_round_trips(
        name in "[A-Za-z][A-Za-z0-9_]{0,20}",
        tid in 0u32..10_000,
        duration in 0u64..1_000_000_000,
    ) {
        let line = format!(
            "[Performance] {name} with Tid {tid} has been processed in {duration} ms"
        );
        let records = extract_events([line.as_str()]);
        prop_assert_eq!(
            records,
            vec![EventRecord { name, duration_ms: duration }]
        );
    }

    #[test]
    fn prop_aggregation_invariants(
        durations_by_name in prop::collection::hash_map(
            "[a-z]{1,8}",
            prop::collection::vec(0u64..1_000_000, 1..20),
            0..10,
        ),
    ) {
        let records: Vec<EventRecord> = durations_by_name
            .iter()
            .flat_map(|(name, durations)| {
                durations.iter().map(|&duration_ms| EventRecord {
                    name: name.clone(),
                    duration_ms,
                })
            })
            .collect();

        let stats = aggregate(&records);

        // One entry per distinct name, none for absent names
        prop_assert_eq!(stats.len(), durations_by_name.len());

        for (name, durations) in &durations_by_name {
            let s = &stats[name];
            prop_assert_eq!(s.count, durations.len() as u64);
            prop_assert_eq!(s.min_ms, *durations.iter().min().unwrap());
            prop_assert_eq!(s.max_ms, *durations.iter().max().unwrap());
            prop_assert!(s.min_ms as f64 <= s.avg_ms);
            prop_assert!(s.avg_ms <= s.max_ms as f64);
            if s.count == 1 {
                prop_assert_eq!(s.avg_ms, s.min_ms as f64);
            }
        }
    }

    #[test]
    fn prop_rendering_is_deterministic(
        durations_by_name in prop::collection::hash_map(
            "[A-Za-z]{1,50}",
            prop::collection::vec(0u64..1_000_000, 1..5),
            0..8,
        ),
    ) {
        let records: Vec<EventRecord> = durations_by_name
            .iter()
            .flat_map(|(name, durations)| {
                durations.iter().map(|&duration_ms| EventRecord {
                    name: name.clone(),
                    duration_ms,
                })
            })
            .collect();

        let stats = aggregate(&records);
        let first = render(&stats);
        let second = render(&stats);
        prop_assert_eq!(&first, &second);

        // Header plus one row per event, regardless of name length
        prop_assert_eq!(first.lines().count(), stats.len() + 1);
    }
}
