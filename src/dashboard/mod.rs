//! Application state and event handling, independent of any front end.
//!
//! [`Dashboard`] owns a [`DashboardState`] and an [`AgencySource`]. Front ends
//! feed it [`UiEvent`]s and act on the returned [`RenderInstruction`]:
//!
//! ```no_run
//! use spending_reporter::dashboard::{Dashboard, UiEvent};
//! use spending_reporter::fetch::NoOpSource;
//!
//! let mut dashboard = Dashboard::new(NoOpSource);
//! dashboard.refresh();
//! dashboard.handle(UiEvent::GenerateSummary);
//! println!("{}", dashboard.state().report().unwrap_or_default());
//! ```

mod dispatch;
mod state;

pub use dispatch::{
    dispatch, handler_for, EventKind, Handler, RenderInstruction, Transition, UiEvent, EVENT_TABLE,
};
pub use state::{DashboardState, Phase, Tab};

use crate::fetch::AgencySource;
use crate::reports::{TableView, DEFAULT_ROW_LIMIT};

/// State plus data source, driven one event at a time.
pub struct Dashboard<S: AgencySource> {
    state: DashboardState,
    source: S,
    row_limit: usize,
}

impl<S: AgencySource> Dashboard<S> {
    /// Create a dashboard with empty state.
    pub fn new(source: S) -> Self {
        Self {
            state: DashboardState::new(),
            source,
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }

    /// Set the number of rows shown in the data table.
    #[must_use]
    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = row_limit.max(1);
        self
    }

    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn row_limit(&self) -> usize {
        self.row_limit
    }

    /// Apply one event and return what needs redrawing.
    pub fn handle(&mut self, event: UiEvent) -> RenderInstruction {
        let state = std::mem::take(&mut self.state);
        let Transition { state, render } = dispatch(state, event);
        self.state = state;
        render
    }

    /// Refresh synchronously: the fetch runs inline and its completion is
    /// dispatched before returning.
    pub fn refresh(&mut self) -> RenderInstruction {
        match self.handle(UiEvent::Refresh) {
            RenderInstruction::StartFetch => {
                tracing::debug!("Fetching from {}", self.source.name());
                let table = self.source.fetch();
                self.handle(UiEvent::FetchCompleted(table))
            }
            other => other,
        }
    }

    /// The data table as currently rendered.
    #[must_use]
    pub fn table_view(&self) -> TableView {
        TableView::from_table(self.state.table(), self.row_limit)
    }
}
