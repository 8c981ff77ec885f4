//! Terminal rendering of an aggregated table.

use super::format::format_value;
use crate::aggregator::ResultTable;
use crate::experiment::Category;
use colored::*;

/// Render a table for the terminal, marking the best method of each row
pub fn render_terminal_table(table: &ResultTable, column: &str, categories: &[Category]) -> String {
    let label_width = categories
        .iter()
        .map(|c| c.label.len())
        .chain(std::iter::once(column.len()))
        .max()
        .unwrap_or(0);
    let value_width = table.methods().iter().map(|m| m.len()).max().unwrap_or(0).max(12);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}", column, width = label_width).bold().to_string());
    for method in table.methods() {
        out.push_str("  ");
        out.push_str(&format!("{:>width$}", method, width = value_width).bold().to_string());
    }
    out.push('\n');

    for (idx, category) in categories.iter().enumerate() {
        let best = best_method(table, idx);
        out.push_str(&format!("{:<width$}", category.label, width = label_width));
        for (method, values) in table.iter() {
            let cell = values.get(idx).copied().unwrap_or(0.0);
            let text = format!("{:>width$}", format_value(cell), width = value_width);
            out.push_str("  ");
            if Some(method) == best {
                out.push_str(&text.green().to_string());
            } else {
                out.push_str(&text);
            }
        }
        out.push('\n');
    }

    out
}

/// Method with the highest throughput in a category
fn best_method(table: &ResultTable, category: usize) -> Option<&str> {
    table
        .iter()
        .filter_map(|(method, values)| values.get(category).map(|v| (method, *v)))
        .filter(|(_, v)| *v > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(method, _)| method)
}
