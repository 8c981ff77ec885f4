//! Result file path templates.
//!
//! Each experiment script laid its logs out differently on disk. A
//! `ResultLocator` maps (method, category, run) to the log to read, so the
//! aggregation pass never hardcodes a directory scheme.

use crate::utils::config::result_file_name;
use std::path::{Path, PathBuf};

/// Maps a grid cell to the result log that feeds it
pub trait ResultLocator {
    /// Path of the log for `method` in `category` on run `run` (1-based)
    fn result_path(&self, exp_dir: &Path, method: &str, category: &str, run: u32) -> PathBuf;
}

impl<F> ResultLocator for F
where
    F: Fn(&Path, &str, &str, u32) -> PathBuf,
{
    fn result_path(&self, exp_dir: &Path, method: &str, category: &str, run: u32) -> PathBuf {
        self(exp_dir, method, category, run)
    }
}

/// Directory layouts produced by the benchmark harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathLayout {
    /// `<exp_dir>/run<k>/<method>_workload<w>_ycsb_result.txt`
    Workloads,

    /// `<exp_dir>/<scale>/run<k>/<method>_workload<w>_ycsb_result.txt`
    Scales { workload: String },

    /// `<exp_dir>/<scale>-<tag>-[no-]dynamic/run<k>/<method>_workload<w>_ycsb_result.txt`
    TaggedScales {
        workload: String,
        tag: String,
        dynamic: bool,
    },
}

impl ResultLocator for PathLayout {
    fn result_path(&self, exp_dir: &Path, method: &str, category: &str, run: u32) -> PathBuf {
        let run_dir = format!("run{}", run);

        match self {
            PathLayout::Workloads => exp_dir
                .join(run_dir)
                .join(result_file_name(method, category)),
            PathLayout::Scales { workload } => exp_dir
                .join(category)
                .join(run_dir)
                .join(result_file_name(method, workload)),
            PathLayout::TaggedScales {
                workload,
                tag,
                dynamic,
            } => {
                let scale_dir = format!("{}{}", category, scale_dir_suffix(tag, *dynamic));
                exp_dir
                    .join(scale_dir)
                    .join(run_dir)
                    .join(result_file_name(method, workload))
            }
        }
    }
}

/// Directory suffix for tagged scale runs, e.g. `-ycsb-no-dynamic`
pub fn scale_dir_suffix(tag: &str, dynamic: bool) -> String {
    let flavor = if dynamic { "dynamic" } else { "no-dynamic" };
    format!("-{}-{}", tag, flavor)
}
