//! Templated agency summary ("AI ANALYSIS REPORT").
//!
//! The text is deterministic: the same table and selection always produce
//! the same report.

use super::format::{format_currency, format_percent};
use crate::error::{ReportErrorKind, ReporterError, Result};
use crate::model::{AgencyRecord, AgencyTable};

/// Guidance shown when there is no data or no agency selected.
pub const SELECTION_PROMPT: &str = "Please fetch data and select an agency first.";

/// Generate the summary report for the selected agency.
///
/// Returns [`SELECTION_PROMPT`] when the table is empty or nothing is
/// selected. A selection missing from the table and a zero budget authority
/// are reported as errors.
pub fn generate_summary(table: &AgencyTable, selected_code: Option<&str>) -> Result<String> {
    let code = match selected_code {
        Some(code) if !table.is_empty() && !code.is_empty() => code,
        _ => return Ok(SELECTION_PROMPT.to_string()),
    };

    let record = table.find(code).ok_or_else(|| {
        ReporterError::report(
            "looking up selected agency",
            ReportErrorKind::RecordNotFound {
                code: code.to_string(),
            },
        )
    })?;

    let utilization = utilization_percent(record)?;

    Ok(format!(
        "AI ANALYSIS REPORT:\n\
         Agency: {name} ({abbreviation})\n\
         Current Budget Authority: {budget}\n\
         Actual Outlays: {outlays}\n\
         \n\
         Insight: {name} has utilized {utilization} of its budget authority this year.",
        name = record.agency_name,
        abbreviation = record.abbreviation,
        budget = format_currency(record.budget_authority_amount),
        outlays = format_currency(record.outlay_amount),
        utilization = format_percent(utilization),
    ))
}

/// Outlays as a percentage of budget authority.
pub fn utilization_percent(record: &AgencyRecord) -> Result<f64> {
    if record.budget_authority_amount == 0.0 {
        return Err(ReporterError::report(
            "computing utilization",
            ReportErrorKind::ZeroBudgetAuthority {
                agency: record.agency_name.clone(),
            },
        ));
    }
    Ok(record.outlay_amount / record.budget_authority_amount * 100.0)
}

/// Summary text for display: errors become a one-line message instead of
/// propagating.
#[must_use]
pub fn summary_text(table: &AgencyTable, selected_code: Option<&str>) -> String {
    generate_summary(table, selected_code).unwrap_or_else(|e| {
        tracing::warn!("Summary generation failed: {}", e);
        e.user_message()
    })
}
