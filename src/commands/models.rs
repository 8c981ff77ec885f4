use crate::parser::Phase;
use std::path::PathBuf;

/// Arguments for the workloads command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct WorkloadsArgs {
    /// Number of runs per workload
    pub runs: u32,

    /// Experiment directory holding `run<k>/` folders
    pub exp_dir: PathBuf,

    /// Optional experiment TOML file
    pub config: Option<PathBuf>,

    /// Output path override (defaults to `<exp_dir>/ycsb_agg_exp.txt`)
    pub output: Option<PathBuf>,

    /// Fail on logs without a throughput line
    pub strict: bool,

    /// Print the table to stdout
    pub print_summary: bool,
}

/// Arguments for the scalability command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ScalabilityArgs {
    /// Number of runs per scale
    pub runs: u32,

    /// Experiment directory holding one folder per scale
    pub exp_dir: PathBuf,

    /// Dynamic experiment flavor (affects output name, and directories when tagged)
    pub dynamic: bool,

    /// Experiment tag; selects `<scale>-<tag>-[no-]dynamic` directories
    pub tag: Option<String>,

    /// Phase to scan (defaults to the config file's, then `run`)
    pub phase: Option<Phase>,

    /// Optional experiment TOML file
    pub config: Option<PathBuf>,

    /// Output path override
    pub output: Option<PathBuf>,

    /// Fail on logs without a throughput line
    pub strict: bool,

    /// Print the table to stdout
    pub print_summary: bool,
}
