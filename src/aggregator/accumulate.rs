//! Sum extracted throughput values over every run of the file grid.
//!
//! The grid is method × category × run. Every cell is read exactly once,
//! in that order, and the first unreadable or unparsable file aborts the
//! whole pass.

use super::table::ResultTable;
use crate::experiment::{AggregationConfig, AggregationMode, MissingMarkerPolicy};
use crate::parser::{extract_metrics, Extraction, Phase, ScanPolicy};
use crate::utils::error::AggregateError;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Accumulate raw sums for the whole file grid
///
/// **Public** - main entry point for accumulation
///
/// # Arguments
/// * `config` - Experiment grid, mode and path template
///
/// # Returns
/// A fresh table of sums (not yet divided by the run count)
///
/// # Errors
/// * `AggregateError::Config` - The grid is invalid
/// * `AggregateError::FileAccess` - A result log is missing or unreadable
/// * `AggregateError::Parse` - A marker line has a malformed value
/// * `AggregateError::MissingMarker` - No marker line, under the strict policy
pub fn accumulate(config: &AggregationConfig) -> Result<ResultTable, AggregateError> {
    config.validate()?;

    let mut table = ResultTable::new(&config.methods, config.categories.len());
    let scan = config.mode.scan_policy();
    let first = config.mode.first_file_category();

    info!(
        "Accumulating {} methods x {} categories x {} runs",
        config.methods.len(),
        config.categories.len() - first,
        config.runs
    );

    for (method_idx, method) in config.methods.iter().enumerate() {
        for (category_idx, category) in config.categories.iter().enumerate().skip(first) {
            for run in 1..=config.runs {
                let path = config
                    .locator
                    .result_path(&config.exp_dir, method, &category.key, run);

                let extraction = read_result(&path, scan)?;
                let missing = config.missing_policy;

                match config.mode {
                    AggregationMode::PerWorkload => {
                        // Every workload log also reports its load phase
                        if let Some(value) = resolve(&extraction, Phase::Load, &path, missing)? {
                            table.add(method_idx, 0, value);
                        }
                        if let Some(value) = resolve(&extraction, Phase::Run, &path, missing)? {
                            table.add(method_idx, category_idx, value);
                        }
                    }
                    AggregationMode::PerScale { phase } => {
                        if let Some(value) = resolve(&extraction, phase, &path, missing)? {
                            table.add(method_idx, category_idx, value);
                        }
                    }
                }
            }
        }
    }

    Ok(table)
}

/// Read one result log and extract its metrics
///
/// **Private** - the file is closed before this returns
fn read_result(path: &Path, policy: ScanPolicy) -> Result<Extraction, AggregateError> {
    debug!("Reading {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| AggregateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    extract_metrics(&content, policy).map_err(|source| AggregateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the missing-marker policy to one phase of an extraction
///
/// **Private** - internal helper for accumulate
fn resolve(
    extraction: &Extraction,
    phase: Phase,
    path: &Path,
    policy: MissingMarkerPolicy,
) -> Result<Option<f64>, AggregateError> {
    match (extraction.get(phase), policy) {
        (Some(value), _) => Ok(Some(value)),
        (None, MissingMarkerPolicy::Zero) => {
            warn!(
                "No '{}' line in {}, counting it as zero",
                phase.marker(),
                path.display()
            );
            Ok(None)
        }
        (None, MissingMarkerPolicy::Error) => Err(AggregateError::MissingMarker {
            path: path.to_path_buf(),
            marker: phase.marker(),
        }),
    }
}
