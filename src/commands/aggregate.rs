//! Aggregation command implementations.
//!
//! Both commands:
//! 1. Resolve the experiment settings
//! 2. Build the aggregation config for their layout
//! 3. Accumulate and normalize the file grid
//! 4. Write the CSV table

use super::models::{ScalabilityArgs, WorkloadsArgs};
use crate::aggregator::aggregate;
use crate::experiment::{
    load_settings, AggregationConfig, AggregationMode, ExperimentSettings, MissingMarkerPolicy,
    PathLayout,
};
use crate::output::{render_terminal_table, validate_path, write_table};
use crate::parser::Phase;
use crate::utils::config::{scalability_output_file, WORKLOAD_OUTPUT_FILE};
use crate::utils::error::ConfigError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the workloads command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written table
///
/// # Errors
/// * Invalid arguments or experiment settings
/// * Missing or malformed result logs
/// * File write errors
pub fn execute_workloads(args: WorkloadsArgs) -> Result<PathBuf> {
    validate_runs(args.runs)?;
    let settings = resolve_settings(args.config.as_deref())?;

    let config = AggregationConfig::new(
        args.runs,
        &args.exp_dir,
        settings.methods(),
        settings.workload_categories(),
        AggregationMode::PerWorkload,
        PathLayout::Workloads,
    )
    .with_missing_policy(missing_policy(args.strict));

    let output = args
        .output
        .unwrap_or_else(|| args.exp_dir.join(WORKLOAD_OUTPUT_FILE));

    run_pipeline(&config, &output, args.print_summary)?;
    Ok(output)
}

/// Execute the scalability command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written table
pub fn execute_scalability(args: ScalabilityArgs) -> Result<PathBuf> {
    validate_runs(args.runs)?;
    let settings = resolve_settings(args.config.as_deref())?;

    let workload = settings.scale_workload();
    let phase = args.phase.or(settings.phase).unwrap_or(Phase::Run);
    let tag = args.tag.or_else(|| settings.tag.clone());

    let layout = match tag {
        Some(tag) => PathLayout::TaggedScales {
            workload: workload.clone(),
            tag,
            dynamic: args.dynamic,
        },
        None => PathLayout::Scales {
            workload: workload.clone(),
        },
    };
    debug!("Scale layout: {:?}, phase: {}", layout, phase);

    let config = AggregationConfig::new(
        args.runs,
        &args.exp_dir,
        settings.methods(),
        settings.scale_categories(),
        AggregationMode::PerScale { phase },
        layout,
    )
    .with_missing_policy(missing_policy(args.strict));

    let output = args
        .output
        .unwrap_or_else(|| args.exp_dir.join(scalability_output_file(&workload, args.dynamic)));

    run_pipeline(&config, &output, args.print_summary)?;
    Ok(output)
}

/// Aggregate a config and write its table
///
/// **Private** - shared by both commands
fn run_pipeline(config: &AggregationConfig, output: &Path, print_summary: bool) -> Result<()> {
    let start_time = Instant::now();

    info!("Aggregating {} runs from {}", config.runs, config.exp_dir.display());

    validate_path(output).context("Invalid output path")?;

    let table = aggregate(config).context("Failed to aggregate results")?;

    let column = config.mode.label_column();
    write_table(&table, column, &config.categories, output)
        .context("Failed to write result table")?;

    info!("✓ Table written to: {}", output.display());

    if print_summary {
        println!("\n{}", render_terminal_table(&table, column, &config.categories));
    }

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Load the settings file, or fall back to defaults
fn resolve_settings(path: Option<&Path>) -> Result<ExperimentSettings> {
    match path {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load experiment config {}", path.display())),
        None => Ok(ExperimentSettings::default()),
    }
}

/// Validate the run count
///
/// **Public** - can be called before execution for early validation
pub fn validate_runs(runs: u32) -> Result<()> {
    if runs == 0 {
        return Err(ConfigError::ZeroRuns.into());
    }
    Ok(())
}

fn missing_policy(strict: bool) -> MissingMarkerPolicy {
    if strict {
        MissingMarkerPolicy::Error
    } else {
        MissingMarkerPolicy::Zero
    }
}
