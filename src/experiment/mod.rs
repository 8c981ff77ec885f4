//! Experiment description: what to read and how to fold it.
//!
//! An `AggregationConfig` names the run count, the experiment directory,
//! the method and category grid, the aggregation mode and the path
//! template. Nothing in the aggregator reads a hardcoded layout.

pub mod layout;
pub mod settings;

pub use layout::{scale_dir_suffix, PathLayout, ResultLocator};
pub use settings::{load_settings, ExperimentSettings, ScaleEntry};

use crate::parser::{Phase, ScanPolicy};
use crate::utils::config::{LOAD_WORKLOAD, SCALE_COLUMN, WORKLOAD_COLUMN};
use crate::utils::error::ConfigError;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// A row of the output table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Name used in result paths (`b`, `scale1x`)
    pub key: String,
    /// Human-readable row label (`b`, `10GB`)
    pub label: String,
}

impl Category {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }

    /// Category whose label is its key
    pub fn named(key: &str) -> Self {
        Self::new(key, key)
    }
}

/// Which aggregation the pass performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Categories are workloads. The first one is the load slot: it is not
    /// read from disk but collects the load line of every workload log.
    PerWorkload,

    /// Categories are scales; each log contributes the given phase only.
    PerScale { phase: Phase },
}

impl AggregationMode {
    pub fn scan_policy(self) -> ScanPolicy {
        match self {
            AggregationMode::PerWorkload => ScanPolicy::Combined,
            AggregationMode::PerScale { phase } => ScanPolicy::Expected(phase),
        }
    }

    /// Header of the label column in the output table
    pub fn label_column(self) -> &'static str {
        match self {
            AggregationMode::PerWorkload => WORKLOAD_COLUMN,
            AggregationMode::PerScale { .. } => SCALE_COLUMN,
        }
    }

    /// Index of the first category read from disk
    pub fn first_file_category(self) -> usize {
        match self {
            AggregationMode::PerWorkload => 1,
            AggregationMode::PerScale { .. } => 0,
        }
    }
}

/// What to do when a log has no matching marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMarkerPolicy {
    /// Contribute nothing and log a warning
    #[default]
    Zero,
    /// Abort the aggregation
    Error,
}

/// Everything one aggregation pass needs
pub struct AggregationConfig {
    pub runs: u32,
    pub exp_dir: PathBuf,
    pub methods: Vec<String>,
    pub categories: Vec<Category>,
    pub mode: AggregationMode,
    pub missing_policy: MissingMarkerPolicy,
    pub locator: Box<dyn ResultLocator>,
}

impl fmt::Debug for AggregationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregationConfig")
            .field("runs", &self.runs)
            .field("exp_dir", &self.exp_dir)
            .field("methods", &self.methods)
            .field("categories", &self.categories)
            .field("mode", &self.mode)
            .field("missing_policy", &self.missing_policy)
            .finish_non_exhaustive()
    }
}

impl AggregationConfig {
    /// Create a config with the lenient missing-marker policy
    pub fn new(
        runs: u32,
        exp_dir: impl Into<PathBuf>,
        methods: Vec<String>,
        categories: Vec<Category>,
        mode: AggregationMode,
        locator: impl ResultLocator + 'static,
    ) -> Self {
        Self {
            runs,
            exp_dir: exp_dir.into(),
            methods,
            categories,
            mode,
            missing_policy: MissingMarkerPolicy::default(),
            locator: Box::new(locator),
        }
    }

    pub fn with_missing_policy(mut self, policy: MissingMarkerPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Check the grid before any file is touched
    ///
    /// # Errors
    /// * `ConfigError::ZeroRuns` - run count is zero
    /// * `ConfigError::NoMethods` / `NoCategories` - empty grid
    /// * `ConfigError::Duplicate` - a method or category appears twice
    /// * `ConfigError::MissingLoadSlot` - per-workload grid without a leading `load`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        check_unique("method", self.methods.iter().map(String::as_str))?;
        check_unique("category", self.categories.iter().map(|c| c.key.as_str()))?;

        if self.mode == AggregationMode::PerWorkload && self.categories[0].key != LOAD_WORKLOAD {
            return Err(ConfigError::MissingLoadSlot(LOAD_WORKLOAD.to_string()));
        }

        Ok(())
    }
}

fn check_unique<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::Duplicate {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        runs: u32,
        methods: &[&str],
        categories: &[&str],
        mode: AggregationMode,
    ) -> AggregationConfig {
        AggregationConfig::new(
            runs,
            "/exp",
            methods.iter().map(|m| m.to_string()).collect(),
            categories.iter().map(|c| Category::named(c)).collect(),
            mode,
            PathLayout::Workloads,
        )
    }

    #[test]
    fn test_validate_ok() {
        let cfg = config(3, &["default"], &["load", "b"], AggregationMode::PerWorkload);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_runs() {
        let cfg = config(0, &["default"], &["load", "b"], AggregationMode::PerWorkload);
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroRuns)));
    }

    #[test]
    fn test_validate_empty_grid() {
        let cfg = config(1, &[], &["load"], AggregationMode::PerWorkload);
        assert!(matches!(cfg.validate(), Err(ConfigError::NoMethods)));

        let phase = Phase::Run;
        let cfg = config(1, &["default"], &[], AggregationMode::PerScale { phase });
        assert!(matches!(cfg.validate(), Err(ConfigError::NoCategories)));
    }

    #[test]
    fn test_validate_duplicates() {
        let cfg = config(1, &["default", "default"], &["load"], AggregationMode::PerWorkload);
        assert!(matches!(cfg.validate(), Err(ConfigError::Duplicate { kind: "method", .. })));
    }

    #[test]
    fn test_validate_missing_load_slot() {
        let cfg = config(1, &["default"], &["a", "b"], AggregationMode::PerWorkload);
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingLoadSlot(_))));

        // Scale grids have no load slot
        let mode = AggregationMode::PerScale { phase: Phase::Run };
        let cfg = config(1, &["default"], &["a", "b"], mode);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_mode_policies() {
        assert_eq!(AggregationMode::PerWorkload.scan_policy(), ScanPolicy::Combined);
        let mode = AggregationMode::PerScale { phase: Phase::Load };
        assert_eq!(mode.scan_policy(), ScanPolicy::Expected(Phase::Load));
        assert_eq!(mode.label_column(), "scales");
        assert_eq!(AggregationMode::PerWorkload.label_column(), "workloads");
    }
}
