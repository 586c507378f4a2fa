//! Data fetcher for the USAspending top-tier agency list.
//!
//! The dashboard talks to an [`AgencySource`], whose `fetch` never fails:
//! any network, status or decoding problem is logged and an empty table is
//! returned instead. Callers that need the failure itself use
//! [`UsaSpendingClient::try_fetch`].
//!
//! # Example
//!
//! ```no_run
//! use spending_reporter::fetch::{AgencySource, UsaSpendingClient, UsaSpendingClientConfig};
//!
//! let client = UsaSpendingClient::new(UsaSpendingClientConfig::default())?;
//! let table = client.fetch();
//! println!("{} agencies", table.len());
//! # Ok::<(), spending_reporter::ReporterError>(())
//! ```

mod client;
mod response;

pub use client::{UsaSpendingClient, UsaSpendingClientConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use response::ToptierAgenciesResponse;

use crate::model::AgencyTable;

/// A provider of agency snapshots.
///
/// `Send + Sync` so the dashboard can run a fetch on a worker thread.
pub trait AgencySource: Send + Sync {
    /// Fetch the current agency table.
    ///
    /// Failures are reported through logging and yield an empty table;
    /// "no data" and "fetch failed" are indistinguishable to the caller.
    fn fetch(&self) -> AgencyTable;

    /// Name of this source, for logs and status lines.
    fn name(&self) -> &'static str;
}

/// A source that never returns data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSource;

impl AgencySource for NoOpSource {
    fn fetch(&self) -> AgencyTable {
        AgencyTable::new()
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }
}

/// A source that always returns the same snapshot.
///
/// Useful for demos and for driving the dashboard without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    table: AgencyTable,
}

impl StaticSource {
    #[must_use]
    pub const fn new(table: AgencyTable) -> Self {
        Self { table }
    }
}

impl AgencySource for StaticSource {
    fn fetch(&self) -> AgencyTable {
        self.table.clone()
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}

impl<S: AgencySource + ?Sized> AgencySource for std::sync::Arc<S> {
    fn fetch(&self) -> AgencyTable {
        (**self).fetch()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
