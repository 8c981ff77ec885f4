//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod aggregate;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use aggregate::{execute_scalability, execute_workloads, validate_runs};
pub use models::{ScalabilityArgs, WorkloadsArgs};
pub use utils::{display_layout, display_version};
