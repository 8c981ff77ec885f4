//! YCSB Aggregate
//!
//! Averages YCSB-style benchmark result logs across repeated runs and
//! writes CSV summary tables.
//!
//! This crate provides the core implementation for the
//! `ycsb-agg` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! # <exp_dir>/run<k>/<method>_workload<w>_ycsb_result.txt
//! ycsb-agg workloads 3 results/exp1
//!
//! # <exp_dir>/<scale>/run<k>/<method>_workloadb_ycsb_result.txt
//! ycsb-agg scalability 3 results/scale true
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use ycsb_aggregate::aggregator::aggregate;
//! use ycsb_aggregate::experiment::{AggregationConfig, AggregationMode, Category, PathLayout};
//! use ycsb_aggregate::output::write_table;
//!
//! let config = AggregationConfig::new(
//!     3,
//!     "results/exp1",
//!     vec!["default".to_string()],
//!     vec![Category::named("load"), Category::named("b")],
//!     AggregationMode::PerWorkload,
//!     PathLayout::Workloads,
//! );
//! let table = aggregate(&config)?;
//! write_table(&table, "workloads", &config.categories, "out.csv")?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod experiment;
pub mod output;
pub mod parser;
pub mod utils;
