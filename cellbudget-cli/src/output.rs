//! Result table rendering

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use cellbudget_sim::ResultTable;

/// Output encoding of the result table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON object of columns
    #[default]
    Json,
    /// Aligned plain-text table, one row per receiver
    Table,
}

/// Renders the table in the requested format.
pub fn render(table: &ResultTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(table).context("Failed to serialize results")
        }
        OutputFormat::Table => Ok(render_text(table)),
    }
}

fn render_text(table: &ResultTable) -> String {
    let columns: Vec<Vec<String>> = ResultTable::FIELD_NAMES
        .iter()
        .map(|name| {
            let mut cells = vec![name.to_string()];
            if let Some(values) = table.field(name) {
                cells.extend(values.iter().map(|v| format!("{v:.2}")));
            }
            cells
        })
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|cells| cells.iter().map(String::len).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for line in 0..=table.len() {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(cells, width)| format!("{:>width$}", cells[line], width = width))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
        if line == 0 {
            let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
            let _ = writeln!(out, "{}", "-".repeat(rule_len));
        }
    }
    out
}
