//! Result log parsing.
//!
//! This module handles:
//! - Locating throughput marker lines
//! - Parsing the trailing metric value
//! - Describing which phase each scan looks for

pub mod extractor;
pub mod schema;

// Re-export main types
pub use extractor::{extract_metrics, extract_phase};
pub use schema::{Extraction, Phase, ScanPolicy};
