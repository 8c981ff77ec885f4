//! CSV summary table writer.
//!
//! Writes a `ResultTable` as `<column>,<method>...` followed by one row
//! per category.

use super::format::format_value;
use crate::aggregator::ResultTable;
use crate::experiment::Category;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::io;
use std::path::Path;

/// Render a table to CSV text
///
/// **Public** - used by `write_table`, handy for tests
///
/// # Arguments
/// * `table` - Normalized table
/// * `column` - Header of the label column (`workloads` or `scales`)
/// * `categories` - Row labels, in table order
///
/// # Errors
/// * `OutputError::ShapeMismatch` - Category count differs from the table
/// * `OutputError::CsvFailed` - CSV encoding error
pub fn render_table(
    table: &ResultTable,
    column: &str,
    categories: &[Category],
) -> Result<String, OutputError> {
    if categories.len() != table.category_count() {
        return Err(OutputError::ShapeMismatch {
            expected: table.category_count(),
            found: categories.len(),
        });
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header = std::iter::once(column).chain(table.methods().iter().map(String::as_str));
    writer.write_record(header)?;

    for (idx, category) in categories.iter().enumerate() {
        let mut record = Vec::with_capacity(table.methods().len() + 1);
        record.push(category.label.clone());
        for (_, values) in table.iter() {
            record.push(format_value(values[idx]));
        }
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::WriteFailed(e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| OutputError::WriteFailed(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write a table to a CSV file, replacing any existing file
///
/// **Public** - main entry point for table output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::ShapeMismatch` / `CsvFailed` - see `render_table`
///
/// # Example
/// ```ignore
/// let table = aggregate(&config)?;
/// write_table(&table, "workloads", &config.categories, "ycsb_agg_exp.txt")?;
/// ```
pub fn write_table(
    table: &ResultTable,
    column: &str,
    categories: &[Category],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing table to: {}", output_path.display());

    validate_path(output_path)?;

    // Render first so a failure leaves no partial file
    let text = render_table(table, column, categories)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    std::fs::write(output_path, &text)?;

    info!("Table written successfully ({} bytes)", text.len());

    Ok(())
}

/// Validate that an output path is usable
///
/// **Public** - callers may check before a long aggregation pass
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
