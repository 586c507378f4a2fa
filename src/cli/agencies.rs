//! Agencies command handler: prints the selector options.

use super::{EXIT_NO_DATA, EXIT_SUCCESS};
use crate::fetch::AgencySource;
use anyhow::Result;
use std::io::Write;

/// Print `code<TAB>name` for each option, in table order.
pub fn run_agencies<S: AgencySource + ?Sized, W: Write>(source: &S, out: &mut W) -> Result<i32> {
    let options = source.fetch().options();
    if options.is_empty() {
        eprintln!("No agency data returned.");
        return Ok(EXIT_NO_DATA);
    }

    for (code, name) in options.iter() {
        writeln!(out, "{code}\t{name}")?;
    }
    Ok(EXIT_SUCCESS)
}
