//! Aggregation of result logs into averaged tables.
//!
//! This module transforms the file grid into:
//! - Raw per-cell sums (accumulate)
//! - Per-run means (normalize)

pub mod accumulate;
pub mod normalize;
pub mod table;

// Re-export main types and functions
pub use accumulate::accumulate;
pub use normalize::normalize;
pub use table::ResultTable;

use crate::experiment::AggregationConfig;
use crate::utils::error::AggregateError;

/// Accumulate and normalize in one call
///
/// **Public** - what the commands use
pub fn aggregate(config: &AggregationConfig) -> Result<ResultTable, AggregateError> {
    let mut table = accumulate(config)?;
    normalize(&mut table, config.runs, config.mode);
    Ok(table)
}
