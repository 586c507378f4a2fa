//! Event dispatch for the dashboard.
//!
//! Every UI event maps to exactly one handler through [`EVENT_TABLE`]. A
//! handler consumes the current [`DashboardState`] and the event payload and
//! returns the next state together with a [`RenderInstruction`] telling the
//! front end what to redraw (or, for [`RenderInstruction::StartFetch`], what
//! to do next).

use super::state::{DashboardState, Tab};
use crate::model::AgencyTable;
use crate::reports::summary_text;
use chrono::Local;

/// Events the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// "Fetch Latest Data" pressed
    Refresh,
    /// A fetch finished with this snapshot (empty on failure)
    FetchCompleted(AgencyTable),
    /// Choose an agency by toptier code
    Select(String),
    SelectNext,
    SelectPrevious,
    /// "Generate AI Summary" pressed
    GenerateSummary,
    ShowTab(Tab),
    NextTab,
    Quit,
}

/// Payload-free discriminant of [`UiEvent`], used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Refresh,
    FetchCompleted,
    Select,
    SelectNext,
    SelectPrevious,
    GenerateSummary,
    ShowTab,
    NextTab,
    Quit,
}

impl UiEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Refresh => EventKind::Refresh,
            Self::FetchCompleted(_) => EventKind::FetchCompleted,
            Self::Select(_) => EventKind::Select,
            Self::SelectNext => EventKind::SelectNext,
            Self::SelectPrevious => EventKind::SelectPrevious,
            Self::GenerateSummary => EventKind::GenerateSummary,
            Self::ShowTab(_) => EventKind::ShowTab,
            Self::NextTab => EventKind::NextTab,
            Self::Quit => EventKind::Quit,
        }
    }
}

/// What the front end should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderInstruction {
    /// State unchanged
    Nothing,
    /// Run the data fetcher, then dispatch [`UiEvent::FetchCompleted`]
    StartFetch,
    /// Redraw the status line only
    Status,
    /// Redraw the data table (and status)
    Table,
    /// Rebuild the agency selector and redraw the data table
    TableAndSelector,
    /// Redraw the agency selector
    Selector,
    /// Redraw the AI Insights panel
    Report,
    /// Redraw the tab bar and active panel
    Tabs,
    /// Leave the event loop
    Exit,
}

/// Result of handling one event.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: DashboardState,
    pub render: RenderInstruction,
}

impl Transition {
    fn new(state: DashboardState, render: RenderInstruction) -> Self {
        Self { state, render }
    }

    fn unchanged(state: DashboardState) -> Self {
        Self::new(state, RenderInstruction::Nothing)
    }
}

/// Event handler signature.
pub type Handler = fn(DashboardState, UiEvent) -> Transition;

/// Dispatch table: one handler per event kind.
pub const EVENT_TABLE: &[(EventKind, Handler)] = &[
    (EventKind::Refresh, on_refresh),
    (EventKind::FetchCompleted, on_fetch_completed),
    (EventKind::Select, on_select),
    (EventKind::SelectNext, on_select_step),
    (EventKind::SelectPrevious, on_select_step),
    (EventKind::GenerateSummary, on_generate_summary),
    (EventKind::ShowTab, on_tab),
    (EventKind::NextTab, on_tab),
    (EventKind::Quit, on_quit),
];

/// Look up the handler registered for an event kind.
#[must_use]
pub fn handler_for(kind: EventKind) -> Option<Handler> {
    EVENT_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, handler)| *handler)
}

/// Route an event to its handler.
#[must_use]
pub fn dispatch(state: DashboardState, event: UiEvent) -> Transition {
    let kind = event.kind();
    match handler_for(kind) {
        Some(handler) => handler(state, event),
        None => {
            tracing::debug!("No handler registered for {:?}", kind);
            Transition::unchanged(state)
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

fn on_refresh(mut state: DashboardState, _event: UiEvent) -> Transition {
    if state.busy {
        tracing::debug!("Refresh ignored: a fetch is already in flight");
        state.status = Some("Refresh already in progress".to_string());
        return Transition::new(state, RenderInstruction::Status);
    }
    state.busy = true;
    state.status = Some("Fetching…".to_string());
    Transition::new(state, RenderInstruction::StartFetch)
}

fn on_fetch_completed(mut state: DashboardState, event: UiEvent) -> Transition {
    let UiEvent::FetchCompleted(table) = event else {
        return Transition::unchanged(state);
    };

    state.busy = false;
    state.table = table;

    if state.table.is_empty() {
        // Selector keeps its previous options; only the table is cleared.
        state.status = Some("No agency data returned".to_string());
        return Transition::new(state, RenderInstruction::Table);
    }

    state.options = state.table.options();
    let keep = state
        .selected
        .as_deref()
        .is_some_and(|code| state.options.contains(code));
    if !keep {
        state.selected = state.options.first_code().map(str::to_string);
    }

    let now = Local::now();
    state.status = Some(format!(
        "Loaded {} agencies at {}",
        state.table.len(),
        now.format("%H:%M:%S")
    ));
    state.refreshed_at = Some(now);
    tracing::debug!("Selector rebuilt with {} options", state.options.len());
    Transition::new(state, RenderInstruction::TableAndSelector)
}

fn on_select(mut state: DashboardState, event: UiEvent) -> Transition {
    let UiEvent::Select(code) = event else {
        return Transition::unchanged(state);
    };
    if !state.options.contains(&code) {
        tracing::debug!("Ignoring selection of unknown code {}", code);
        return Transition::unchanged(state);
    }
    state.selected = Some(code);
    Transition::new(state, RenderInstruction::Selector)
}

fn on_select_step(mut state: DashboardState, event: UiEvent) -> Transition {
    if state.options.is_empty() {
        return Transition::unchanged(state);
    }
    let last = state.options.len() - 1;
    let next = match (state.selected_index(), &event) {
        (None, _) => 0,
        (Some(i), UiEvent::SelectNext) => (i + 1).min(last),
        (Some(i), _) => i.saturating_sub(1),
    };
    if Some(next) == state.selected_index() {
        return Transition::unchanged(state);
    }
    state.selected = state.options.code_at(next).map(str::to_string);
    Transition::new(state, RenderInstruction::Selector)
}

fn on_generate_summary(mut state: DashboardState, _event: UiEvent) -> Transition {
    state.report = Some(summary_text(&state.table, state.selected.as_deref()));
    state.active_tab = Tab::AiInsights;
    Transition::new(state, RenderInstruction::Report)
}

fn on_tab(mut state: DashboardState, event: UiEvent) -> Transition {
    let tab = match event {
        UiEvent::ShowTab(tab) => tab,
        _ => state.active_tab.next(),
    };
    if tab == state.active_tab {
        return Transition::unchanged(state);
    }
    state.active_tab = tab;
    Transition::new(state, RenderInstruction::Tabs)
}

fn on_quit(mut state: DashboardState, _event: UiEvent) -> Transition {
    state.should_quit = true;
    Transition::new(state, RenderInstruction::Exit)
}
