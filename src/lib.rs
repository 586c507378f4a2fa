//! **Federal agency spending reporter.**
//!
//! `spending-reporter` fetches the top-tier federal agency list from the
//! USAspending API and presents it as an interactive terminal dashboard: a
//! data table of the first agencies, an agency selector, and a templated
//! "AI ANALYSIS REPORT" summarizing how much of its budget authority the
//! selected agency has spent.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`AgencyRecord`], the fetched [`AgencyTable`] and the
//!   ordered [`AgencyOptions`] derived from it.
//! - **[`fetch`]**: the [`AgencySource`] trait and the blocking
//!   [`UsaSpendingClient`]. A fetch never fails outward; problems are logged
//!   and yield an empty table.
//! - **[`reports`]**: the summary generator and the table view.
//! - **[`dashboard`]**: application state and the explicit event-dispatch
//!   table driving it.
//! - **[`tui`]**: the ratatui front end.
//! - **[`config`]**: YAML configuration discovery, validation and schema.
//!
//! ## Getting Started
//!
//! ```no_run
//! use spending_reporter::{generate_summary, AgencySource, UsaSpendingClient, UsaSpendingClientConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UsaSpendingClient::new(UsaSpendingClientConfig::default())?;
//!     let table = client.fetch();
//!
//!     println!("{}", generate_summary(&table, Some("012"))?);
//!     Ok(())
//! }
//! ```
//!
//! ## Driving the Dashboard Without a Terminal
//!
//! ```
//! use spending_reporter::dashboard::{Dashboard, UiEvent};
//! use spending_reporter::fetch::StaticSource;
//! use spending_reporter::model::{AgencyRecord, AgencyTable};
//!
//! let table: AgencyTable =
//!     vec![AgencyRecord::new("001", "Dept of Test", "DOT", 1000.0, 250.0)].into();
//! let mut dashboard = Dashboard::new(StaticSource::new(table));
//!
//! dashboard.refresh();
//! dashboard.handle(UiEvent::GenerateSummary);
//! assert!(dashboard.state().report().unwrap_or_default().contains("25.0%"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math converts between usize and u16
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Render functions are inherently long
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod model;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, ConfigOverrides, Validatable};
pub use dashboard::{Dashboard, DashboardState, RenderInstruction, UiEvent};
pub use error::{FetchErrorKind, ReportErrorKind, ReporterError, Result};
pub use fetch::{AgencySource, NoOpSource, StaticSource, UsaSpendingClient, UsaSpendingClientConfig};
pub use model::{AgencyOptions, AgencyRecord, AgencyTable};
pub use reports::{generate_summary, TableView};
