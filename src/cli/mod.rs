//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Line-oriented handlers take the
//! [`AgencySource`](crate::fetch::AgencySource) and an output writer so they
//! can run against a fixed table in tests.

mod agencies;
mod dashboard;
mod fetch;
mod summary;

pub use agencies::run_agencies;
pub use dashboard::run_dashboard;
pub use fetch::{run_fetch, OutputFormat};
pub use summary::run_summary;

use crate::config::ApiConfig;
use crate::fetch::{UsaSpendingClient, UsaSpendingClientConfig};
use anyhow::{Context, Result};

/// Command completed normally.
pub const EXIT_SUCCESS: i32 = 0;
/// The fetch returned no data, or nothing was selected.
pub const EXIT_NO_DATA: i32 = 1;
/// An error occurred.
pub const EXIT_ERROR: i32 = 3;

/// Build the live API client from configuration.
pub fn build_client(api: &ApiConfig) -> Result<UsaSpendingClient> {
    UsaSpendingClient::new(UsaSpendingClientConfig::from_api_config(api))
        .context("failed to initialize the spending API client")
}
