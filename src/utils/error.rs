//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors in the experiment configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Run count must be a positive integer")]
    ZeroRuns,

    #[error("No methods configured")]
    NoMethods,

    #[error("No categories configured")]
    NoCategories,

    #[error("Duplicate {kind}: {name}")]
    Duplicate { kind: &'static str, name: String },

    #[error("Workload table must start with the '{0}' slot")]
    MissingLoadSlot(String),

    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config TOML parse error: {0}")]
    TomlParseFailed(#[from] toml::de::Error),
}

/// Errors while extracting a metric from one result log
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid throughput value '{token}' on line {line}")]
    InvalidNumber { line: usize, token: String },
}

/// Errors that abort an aggregation pass
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Cannot read result file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("No '{marker}' line in {path}")]
    MissingMarker { path: PathBuf, marker: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Table has {expected} categories but {found} labels were given")]
    ShapeMismatch { expected: usize, found: usize },
}
