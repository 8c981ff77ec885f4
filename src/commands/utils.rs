use anyhow::{Context, Result};
use std::path::Path;
use crate::experiment::{load_settings, ExperimentSettings};
use crate::parser::Phase;

/// Display the methods and categories an aggregation would use
pub fn display_layout(config: Option<&Path>) -> Result<()> {
    let settings = match config {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load experiment config {}", path.display()))?,
        None => ExperimentSettings::default(),
    };

    println!("Methods:");
    for method in settings.methods() {
        println!("  {}", method);
    }

    println!("Workloads:");
    for category in settings.workload_categories() {
        println!("  {}", category.key);
    }

    println!("Scales (workload {}):", settings.scale_workload());
    for category in settings.scale_categories() {
        println!("  {:<12} {}", category.key, category.label);
    }

    println!("Scale phase: {}", settings.phase.unwrap_or(Phase::Run));
    if let Some(tag) = &settings.tag {
        println!("Scale tag: {}", tag);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("ycsb-aggregate v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Averages YCSB benchmark result logs across runs into CSV tables.");
}
