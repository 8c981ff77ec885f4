//! Throughput line extraction from YCSB result logs.
//!
//! A result log is plain text. The lines we care about look like
//! `Run throughput(ops/sec): 12345.6`; only the text after the last
//! colon is parsed.

use super::schema::{Extraction, Phase, ScanPolicy};
use crate::utils::error::ParseError;
use log::{debug, trace};

/// Extract throughput metrics from the text of one result log
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `content` - Full text of the result log
/// * `policy` - Which marker lines to take and where to stop
///
/// # Returns
/// The values found; phases without a matching line stay `None`
///
/// # Errors
/// * `ParseError::InvalidNumber` - A marker line's trailing token is not a float
pub fn extract_metrics(content: &str, policy: ScanPolicy) -> Result<Extraction, ParseError> {
    let mut extraction = Extraction::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = index + 1;

        match policy {
            ScanPolicy::Combined => {
                if line.starts_with(Phase::Load.marker()) {
                    if extraction.load.is_none() {
                        extraction.load = Some(parse_metric_token(line, line_no)?);
                    } else {
                        trace!("Ignoring repeated load line {}", line_no);
                    }
                } else if line.starts_with(Phase::Run.marker()) {
                    extraction.run = Some(parse_metric_token(line, line_no)?);
                    break;
                }
            }
            ScanPolicy::Expected(phase) => {
                if line.starts_with(phase.marker()) {
                    let value = parse_metric_token(line, line_no)?;
                    match phase {
                        Phase::Load => extraction.load = Some(value),
                        Phase::Run => extraction.run = Some(value),
                    }
                    break;
                }
            }
        }
    }

    debug!("Extracted load={:?} run={:?}", extraction.load, extraction.run);
    Ok(extraction)
}

/// Extract the first value of a single phase
///
/// **Public** - shorthand for `ScanPolicy::Expected`
pub fn extract_phase(content: &str, phase: Phase) -> Result<Option<f64>, ParseError> {
    extract_metrics(content, ScanPolicy::Expected(phase)).map(|e| e.get(phase))
}

/// Parse the numeric token after the last colon of a marker line
///
/// **Private** - internal utility
fn parse_metric_token(line: &str, line_no: usize) -> Result<f64, ParseError> {
    // rsplit always yields at least one piece
    let token = line.rsplit(':').next().unwrap_or(line).trim();

    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        token: token.to_string(),
    })
}
