//! Turn accumulated sums into per-run means.

use super::table::ResultTable;
use crate::experiment::AggregationMode;
use log::debug;

/// Divide every accumulator by the run count, in place
///
/// **Public** - second step after `accumulate`
///
/// In per-workload mode the load slot (index 0) collected one load line
/// per workload log, so it is divided by `runs * category_count` instead.
/// `category_count` includes the load slot itself.
pub fn normalize(table: &mut ResultTable, runs: u32, mode: AggregationMode) {
    let runs = f64::from(runs);
    let load_divisor = runs * table.category_count() as f64;

    debug!("Normalizing {} methods over {} runs", table.methods().len(), runs);

    for row in table.rows_mut() {
        for (idx, value) in row.iter_mut().enumerate() {
            if mode == AggregationMode::PerWorkload && idx == 0 {
                *value /= load_divisor;
            } else {
                *value /= runs;
            }
        }
    }
}
