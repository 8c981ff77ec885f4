//! Output writers for aggregated tables.
//!
//! - CSV summary files
//! - Terminal summaries
//! - Cell formatting shared by both

pub mod format;
pub mod summary;
pub mod table_writer;

// Re-export main functions
pub use format::{format_value, round_to};
pub use summary::render_terminal_table;
pub use table_writer::{render_table, validate_path, write_table};
