//! Experiment settings file.
//!
//! Loads method and category lists from TOML. Every field is optional and
//! falls back to the layout of the original experiment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Category;
use crate::parser::Phase;
use crate::utils::config::{
    DEFAULT_METHODS, DEFAULT_SCALES, DEFAULT_SCALE_WORKLOAD, DEFAULT_WORKLOADS,
};
use crate::utils::error::ConfigError;

/// Contents of an experiment TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExperimentSettings {
    /// Methods, in output column order
    #[serde(default)]
    pub methods: Option<Vec<String>>,

    /// Workloads for the per-workload table, starting with `load`
    #[serde(default)]
    pub workloads: Option<Vec<String>>,

    /// Scale directories and their row labels
    #[serde(default)]
    pub scales: Option<Vec<ScaleEntry>>,

    /// Workload measured by the scalability experiment
    #[serde(default)]
    pub scale_workload: Option<String>,

    /// Tag of tagged scale directories
    #[serde(default)]
    pub tag: Option<String>,

    /// Phase scanned by the scalability experiment
    #[serde(default)]
    pub phase: Option<Phase>,
}

/// One scale directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScaleEntry {
    /// Directory name, e.g. `scale1x`
    pub name: String,

    /// Row label, e.g. `10GB`; defaults to `name`
    #[serde(default)]
    pub label: Option<String>,
}

impl ExperimentSettings {
    pub fn methods(&self) -> Vec<String> {
        self.methods
            .clone()
            .unwrap_or_else(|| DEFAULT_METHODS.iter().map(|m| m.to_string()).collect())
    }

    /// Workload categories; the label of a workload is its name
    pub fn workload_categories(&self) -> Vec<Category> {
        match &self.workloads {
            Some(workloads) => workloads.iter().map(|w| Category::named(w)).collect(),
            None => DEFAULT_WORKLOADS.iter().map(|w| Category::named(w)).collect(),
        }
    }

    pub fn scale_categories(&self) -> Vec<Category> {
        match &self.scales {
            Some(scales) => scales
                .iter()
                .map(|s| Category::new(&s.name, s.label.as_deref().unwrap_or(&s.name)))
                .collect(),
            None => DEFAULT_SCALES
                .iter()
                .map(|(name, label)| Category::new(name, label))
                .collect(),
        }
    }

    pub fn scale_workload(&self) -> String {
        self.scale_workload
            .clone()
            .unwrap_or_else(|| DEFAULT_SCALE_WORKLOAD.to_string())
    }
}

/// Load experiment settings from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::TomlParseFailed` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let settings = load_settings("experiment.toml")?;
/// ```
pub fn load_settings(path: impl AsRef<Path>) -> Result<ExperimentSettings, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: ExperimentSettings = toml::from_str(&contents)?;
    Ok(settings)
}
