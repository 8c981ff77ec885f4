//! YCSB Aggregate CLI
//!
//! Averages YCSB benchmark result logs across runs into CSV tables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ycsb_aggregate::commands::{
    display_layout, display_version, execute_scalability, execute_workloads, ScalabilityArgs,
    WorkloadsArgs,
};
use ycsb_aggregate::parser::Phase;
use ycsb_aggregate::utils::config::parse_dynamic_flag;

/// YCSB Aggregate - average benchmark results across runs
#[derive(Parser, Debug)]
#[command(name = "ycsb-agg")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Average each workload's throughput across runs
    Workloads {
        /// Number of runs
        runs: u32,

        /// Experiment directory
        exp_dir: PathBuf,

        /// Experiment TOML file (methods, workloads)
        #[arg(short, long, env = "YCSB_AGG_CONFIG")]
        config: Option<PathBuf>,

        /// Output path (defaults to <EXP_DIR>/ycsb_agg_exp.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when a log has no throughput line instead of counting zero
        #[arg(long)]
        strict: bool,

        /// Print the table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Average throughput per data scale across runs
    Scalability {
        /// Number of runs
        runs: u32,

        /// Experiment directory
        exp_dir: PathBuf,

        /// Dynamic experiment ("True"/"true" enables it)
        dynamic: String,

        /// Experiment tag; reads <scale>-<TAG>-[no-]dynamic directories
        #[arg(long)]
        tag: Option<String>,

        /// Phase to average (run or load)
        #[arg(long)]
        phase: Option<Phase>,

        /// Experiment TOML file (methods, scales, workload)
        #[arg(short, long, env = "YCSB_AGG_CONFIG")]
        config: Option<PathBuf>,

        /// Output path (defaults to <EXP_DIR>/ycsb_scalability_workload<W>_[no_]dynamic_exp.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when a log has no throughput line instead of counting zero
        #[arg(long)]
        strict: bool,

        /// Print the table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Show the methods and categories that would be aggregated
    Layout {
        /// Experiment TOML file
        #[arg(short, long, env = "YCSB_AGG_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Workloads {
            runs,
            exp_dir,
            config,
            output,
            strict,
            summary,
        } => {
            let args = WorkloadsArgs {
                runs,
                exp_dir,
                config,
                output,
                strict,
                print_summary: summary,
            };

            execute_workloads(args)?;
        }

        Commands::Scalability {
            runs,
            exp_dir,
            dynamic,
            tag,
            phase,
            config,
            output,
            strict,
            summary,
        } => {
            let args = ScalabilityArgs {
                runs,
                exp_dir,
                dynamic: parse_dynamic_flag(&dynamic),
                tag,
                phase,
                config,
                output,
                strict,
                print_summary: summary,
            };

            execute_scalability(args)?;
        }

        Commands::Layout { config } => {
            display_layout(config.as_deref())?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
