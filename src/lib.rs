//! Perfstat - performance log event statistics reporter
//!
//! This library provides the core pipeline for analyzing a textual
//! performance log: extraction of timed event records from raw lines,
//! aggregation into per-event duration statistics, and rendering of a
//! fixed-width report table.

pub mod cli;
pub mod extractor;
pub mod report;
pub mod stats;
