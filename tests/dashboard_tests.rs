//! End-to-end tests for the dashboard event flow
//!
//! Drives a `Dashboard` through fetch, selection and summary generation
//! without a terminal.

use spending_reporter::{
    dashboard::{Phase, RenderInstruction, Tab},
    generate_summary,
    reports::{EMPTY_TABLE_MESSAGE, SELECTION_PROMPT},
    AgencyRecord, AgencySource, AgencyTable, Dashboard, NoOpSource, StaticSource, UiEvent,
};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Test Fixtures
// ============================================================================

fn agencies(count: usize) -> AgencyTable {
    (1..=count)
        .map(|i| {
            AgencyRecord::new(
                format!("{i:03}"),
                format!("Agency {i}"),
                format!("A{i}"),
                1_000_000.0 * i as f64,
                250_000.0 * i as f64,
            )
        })
        .collect()
}

/// Returns each queued table once, then empty tables.
struct SequenceSource {
    tables: Vec<AgencyTable>,
    calls: AtomicUsize,
}

impl SequenceSource {
    fn new(tables: Vec<AgencyTable>) -> Self {
        Self {
            tables,
            calls: AtomicUsize::new(0),
        }
    }
}

impl AgencySource for SequenceSource {
    fn fetch(&self) -> AgencyTable {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.tables.get(call).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "Sequence"
    }
}

// ============================================================================
// Fetch and table view
// ============================================================================

#[test]
fn test_initial_state() {
    let dashboard = Dashboard::new(NoOpSource);
    let state = dashboard.state();

    assert_eq!(state.phase(), Phase::Empty);
    assert!(state.options().is_empty());
    assert_eq!(state.selected(), None);
    assert_eq!(state.active_tab(), Tab::DataTable);

    let view = dashboard.table_view();
    assert_eq!(view.rows, vec![vec![EMPTY_TABLE_MESSAGE.to_string()]]);
}

#[test]
fn test_twenty_records_render_fifteen_in_order() {
    let mut dashboard = Dashboard::new(StaticSource::new(agencies(20)));
    dashboard.refresh();

    let view = dashboard.table_view();
    assert_eq!(view.rows.len(), 15);
    let names: Vec<&str> = view.rows.iter().map(|row| row[0].as_str()).collect();
    let expected: Vec<String> = (1..=15).map(|i| format!("Agency {i}")).collect();
    assert_eq!(names, expected);

    // The selector still lists every agency
    assert_eq!(dashboard.state().options().len(), 20);
}

#[test]
fn test_options_round_trip_table() {
    let table = agencies(5);
    let mut dashboard = Dashboard::new(StaticSource::new(table.clone()));
    dashboard.refresh();

    let options: Vec<(String, String)> = dashboard
        .state()
        .options()
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();
    let expected: Vec<(String, String)> = table
        .iter()
        .map(|r| (r.toptier_code.clone(), r.agency_name.clone()))
        .collect();
    assert_eq!(options, expected);
}

#[test]
fn test_empty_refetch_keeps_options_and_clears_table() {
    let source = SequenceSource::new(vec![agencies(3)]);
    let mut dashboard = Dashboard::new(source);

    assert_eq!(dashboard.refresh(), RenderInstruction::TableAndSelector);
    dashboard.handle(UiEvent::Select("002".to_string()));

    assert_eq!(dashboard.refresh(), RenderInstruction::Table);
    let state = dashboard.state();
    assert!(state.table().is_empty());
    assert_eq!(state.options().len(), 3);
    assert_eq!(state.selected(), Some("002"));
    assert!(dashboard.table_view().is_placeholder());
}

#[test]
fn test_refetch_keeps_selection_when_still_present() {
    let second: AgencyTable = vec![
        AgencyRecord::new("003", "Agency 3", "A3", 3.0, 1.0),
        AgencyRecord::new("009", "Agency 9", "A9", 9.0, 1.0),
    ]
    .into();
    let mut dashboard = Dashboard::new(SequenceSource::new(vec![agencies(3), second]));
    dashboard.refresh();
    dashboard.handle(UiEvent::Select("003".to_string()));

    dashboard.refresh();
    assert_eq!(dashboard.state().selected(), Some("003"));
    assert_eq!(dashboard.state().selected_index(), Some(0));
}

#[test]
fn test_refetch_falls_back_to_first_option() {
    let second: AgencyTable = vec![AgencyRecord::new("009", "Agency 9", "A9", 9.0, 1.0)].into();
    let mut dashboard = Dashboard::new(SequenceSource::new(vec![agencies(3), second]));
    dashboard.refresh();
    dashboard.handle(UiEvent::Select("002".to_string()));

    dashboard.refresh();
    assert_eq!(dashboard.state().selected(), Some("009"));
}

// ============================================================================
// Summary generation
// ============================================================================

#[test]
fn test_generate_before_fetch_prompts() {
    let mut dashboard = Dashboard::new(NoOpSource);
    dashboard.handle(UiEvent::GenerateSummary);
    assert_eq!(dashboard.state().report(), Some(SELECTION_PROMPT));
}

#[test]
fn test_full_flow_produces_report() {
    let table: AgencyTable =
        vec![AgencyRecord::new("001", "Dept of Test", "DOT", 1000.0, 250.0)].into();
    let mut dashboard = Dashboard::new(StaticSource::new(table));

    dashboard.refresh();
    let render = dashboard.handle(UiEvent::GenerateSummary);

    assert_eq!(render, RenderInstruction::Report);
    assert_eq!(dashboard.state().active_tab(), Tab::AiInsights);
    assert_eq!(
        dashboard.state().report(),
        Some(
            "AI ANALYSIS REPORT:\n\
             Agency: Dept of Test (DOT)\n\
             Current Budget Authority: $1,000.00\n\
             Actual Outlays: $250.00\n\
             \n\
             Insight: Dept of Test has utilized 25.0% of its budget authority this year."
        )
    );
}

#[test]
fn test_report_matches_generator_for_selection() {
    let table = agencies(4);
    let mut dashboard = Dashboard::new(StaticSource::new(table.clone()));
    dashboard.refresh();
    dashboard.handle(UiEvent::SelectNext);
    dashboard.handle(UiEvent::SelectNext);
    dashboard.handle(UiEvent::GenerateSummary);

    let expected = generate_summary(&table, Some("003")).expect("summary");
    assert_eq!(dashboard.state().report(), Some(expected.as_str()));
}

#[test]
fn test_report_survives_selection_change() {
    let mut dashboard = Dashboard::new(StaticSource::new(agencies(2)));
    dashboard.refresh();
    dashboard.handle(UiEvent::GenerateSummary);
    let first = dashboard.state().report().map(str::to_string);

    dashboard.handle(UiEvent::Select("002".to_string()));
    assert_eq!(dashboard.state().report().map(str::to_string), first);
}

#[test]
fn test_quit() {
    let mut dashboard = Dashboard::new(NoOpSource);
    assert_eq!(dashboard.handle(UiEvent::Quit), RenderInstruction::Exit);
    assert!(dashboard.state().should_quit());
}
