//! Fetch command handler.
//!
//! Implements the `fetch` subcommand: one fetch, printed as the dashboard's
//! data table or as JSON.

use super::{EXIT_NO_DATA, EXIT_SUCCESS};
use crate::fetch::AgencySource;
use crate::reports::TableView;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

/// Output format for the `fetch` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table, capped at the configured row limit
    #[default]
    Table,
    /// Every fetched record as a JSON array
    Json,
}

/// Run the fetch command
pub fn run_fetch<S: AgencySource + ?Sized, W: Write>(
    source: &S,
    format: OutputFormat,
    row_limit: usize,
    out: &mut W,
) -> Result<i32> {
    let table = source.fetch();

    match format {
        OutputFormat::Table => {
            let view = TableView::from_table(&table, row_limit);
            out.write_all(view.to_text().as_bytes())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&table).context("failed to serialize agencies")?;
            writeln!(out, "{json}")?;
        }
    }

    if table.is_empty() {
        tracing::info!("No agency data returned by {}", source.name());
        return Ok(EXIT_NO_DATA);
    }
    Ok(EXIT_SUCCESS)
}
