//! Summary command handler.
//!
//! Implements the `summary` subcommand: one fetch, then the executive
//! summary for a single agency.

use super::{EXIT_ERROR, EXIT_NO_DATA, EXIT_SUCCESS};
use crate::fetch::AgencySource;
use crate::reports::{generate_summary, SELECTION_PROMPT};
use anyhow::Result;
use std::io::Write;

/// Run the summary command
pub fn run_summary<S: AgencySource + ?Sized, W: Write>(
    source: &S,
    agency_code: &str,
    out: &mut W,
) -> Result<i32> {
    let table = source.fetch();

    match generate_summary(&table, Some(agency_code)) {
        Ok(text) if text == SELECTION_PROMPT => {
            writeln!(out, "{text}")?;
            Ok(EXIT_NO_DATA)
        }
        Ok(text) => {
            writeln!(out, "{text}")?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            tracing::debug!("Summary for {} failed: {:?}", agency_code, e);
            eprintln!("{}", e.user_message());
            Ok(EXIT_ERROR)
        }
    }
}
