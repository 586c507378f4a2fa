//! Report generation: the agency summary text and the tabular view.
//!
//! - [`generate_summary`] builds the "AI ANALYSIS REPORT" for one agency.
//! - [`TableView`] renders the first rows of a snapshot, or a placeholder.
//! - [`format`] holds the currency and percentage formatting both share.

pub mod format;
mod summary;
mod table;

pub use format::{format_currency, format_grouped, format_percent};
pub use summary::{generate_summary, summary_text, utilization_percent, SELECTION_PROMPT};
pub use table::{TableView, AGENCY_COLUMNS, DEFAULT_ROW_LIMIT, EMPTY_TABLE_MESSAGE};
