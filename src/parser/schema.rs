//! Types describing what the extractor looks for and what it found.

use crate::utils::config::{LOAD_THROUGHPUT_MARKER, RUN_THROUGHPUT_MARKER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Benchmark phase, each reporting its own throughput line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Data loading phase (`Load throughput(ops/sec): ...`)
    Load,
    /// Workload execution phase (`Run throughput(ops/sec): ...`)
    Run,
}

impl Phase {
    /// Line prefix that carries this phase's metric
    pub fn marker(self) -> &'static str {
        match self {
            Phase::Load => LOAD_THROUGHPUT_MARKER,
            Phase::Run => RUN_THROUGHPUT_MARKER,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Load => write!(f, "load"),
            Phase::Run => write!(f, "run"),
        }
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "load" => Ok(Phase::Load),
            "run" => Ok(Phase::Run),
            other => Err(format!("unknown phase '{}' (expected 'load' or 'run')", other)),
        }
    }
}

/// How a result log is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Take the first load line and the first run line, stopping at the run line
    Combined,
    /// Take only the first line of the given phase
    Expected(Phase),
}

/// Metrics found in a single result log
///
/// `None` means the marker never appeared (a silent miss).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extraction {
    pub load: Option<f64>,
    pub run: Option<f64>,
}

impl Extraction {
    /// Value recorded for a phase
    pub fn get(&self, phase: Phase) -> Option<f64> {
        match phase {
            Phase::Load => self.load,
            Phase::Run => self.run,
        }
    }
}
