//! Dashboard state: the latest snapshot plus everything derived from it.

use crate::model::{AgencyOptions, AgencyTable};
use chrono::{DateTime, Local};

/// Whether the dashboard holds any agency data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Loaded,
}

/// Panels of the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    DataTable,
    AiInsights,
}

impl Tab {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DataTable => "Data Table",
            Self::AiInsights => "AI Insights",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::DataTable => 0,
            Self::AiInsights => 1,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::DataTable => Self::AiInsights,
            Self::AiInsights => Self::DataTable,
        }
    }
}

/// All mutable dashboard state, owned by whoever drives the event loop.
///
/// The table is only ever replaced by the fetch-completion handler; every
/// other handler reads it.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub(super) table: AgencyTable,
    pub(super) options: AgencyOptions,
    pub(super) selected: Option<String>,
    pub(super) report: Option<String>,
    pub(super) active_tab: Tab,
    pub(super) busy: bool,
    pub(super) refreshed_at: Option<DateTime<Local>>,
    pub(super) status: Option<String>,
    pub(super) should_quit: bool,
}

impl DashboardState {
    /// Fresh state: empty table, no options, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.table.is_empty() {
            Phase::Empty
        } else {
            Phase::Loaded
        }
    }

    #[must_use]
    pub const fn table(&self) -> &AgencyTable {
        &self.table
    }

    /// Options of the agency selector.
    #[must_use]
    pub const fn options(&self) -> &AgencyOptions {
        &self.options
    }

    /// Currently selected toptier code.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Position of the selection within the options.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .as_deref()
            .and_then(|code| self.options.position(code))
    }

    /// Text of the last generated summary.
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::new();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.options().is_empty());
        assert!(state.selected().is_none());
        assert!(state.report().is_none());
        assert_eq!(state.active_tab(), Tab::DataTable);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::DataTable.next(), Tab::AiInsights);
        assert_eq!(Tab::AiInsights.next(), Tab::DataTable);
        assert_eq!(Tab::AiInsights.title(), "AI Insights");
    }
}
