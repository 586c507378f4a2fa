//! Dashboard layout, rendering and the terminal event loop.
//!
//! Layout: a title line, a sidebar with the controls (fetch button, agency
//! selector, generate button), a main area with the "Data Table" and
//! "AI Insights" tabs, a status bar and a footer with key hints.

use super::events::{map_key, Event, EventHandler};
use super::theme::{colors, render_footer_hints, Styles};
use crate::dashboard::{Dashboard, Phase, RenderInstruction, Tab, UiEvent};
use crate::fetch::AgencySource;
use crate::model::AgencyTable;
use crate::reports::TableView;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
};
use std::io::{self, stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// Minimum terminal size for the full layout.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 20;

const SIDEBAR_WIDTH: u16 = 34;
const PAGE_TITLE: &str = "Federal AI Spending Reporter";

/// Dashboard driven by a shareable source, so fetches can run off-thread.
pub type SharedDashboard = Dashboard<Arc<dyn AgencySource>>;

/// Run the interactive dashboard until the user quits.
pub fn run_tui(dashboard: &mut SharedDashboard, tick_rate_ms: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut terminal, dashboard, &events);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut SharedDashboard,
    events: &EventHandler,
) -> io::Result<()> {
    let (tx, rx): (Sender<AgencyTable>, Receiver<AgencyTable>) = mpsc::channel();

    loop {
        terminal.draw(|frame| render(frame, &*dashboard))?;

        let instruction = match events.next()? {
            Event::Key(key) => map_key(key).map(|event| dashboard.handle(event)),
            Event::Tick | Event::Resize(_, _) => None,
        };

        match instruction {
            Some(RenderInstruction::StartFetch) => {
                spawn_fetch(dashboard, tx.clone());
            }
            Some(RenderInstruction::Exit) => break,
            // ratatui diffs the whole frame on the next draw
            _ => {}
        }

        while let Ok(table) = rx.try_recv() {
            dashboard.handle(UiEvent::FetchCompleted(table));
        }
    }

    Ok(())
}

/// Run the fetch on a worker thread; the table comes back over `tx`.
fn spawn_fetch(dashboard: &mut SharedDashboard, tx: Sender<AgencyTable>) {
    let source = Arc::clone(dashboard.source());
    let spawned = std::thread::Builder::new()
        .name("agency-fetch".to_string())
        .spawn(move || {
            let table = source.fetch();
            if tx.send(table).is_err() {
                tracing::debug!("Dashboard closed before fetch completed");
            }
        });

    if let Err(e) = spawned {
        tracing::warn!("Failed to start fetch thread: {}", e);
        dashboard.handle(UiEvent::FetchCompleted(AgencyTable::new()));
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the whole dashboard.
pub fn render<S: AgencySource>(frame: &mut Frame, dashboard: &Dashboard<S>) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_size_warning(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Sidebar + main
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(chunks[1]);

    render_title(frame, chunks[0]);
    render_sidebar(frame, body[0], dashboard);
    render_main(frame, body[1], dashboard);
    render_status_bar(frame, chunks[2], dashboard);
    render_footer(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![Span::styled(
        PAGE_TITLE,
        Styles::header_title(),
    )]));
    frame.render_widget(title, area);
}

fn render_sidebar<S: AgencySource>(frame: &mut Frame, area: Rect, dashboard: &Dashboard<S>) {
    let state = dashboard.state();
    let block = Block::default()
        .title(Span::styled(" Controls ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Fetch button
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Selector label
            Constraint::Min(3),    // Selector options
            Constraint::Length(1), // Generate button
        ])
        .split(inner);

    let fetch_label = if state.is_busy() {
        Span::styled(" Fetching…", Styles::warning())
    } else {
        Span::styled(" Fetch Latest Data", Styles::text())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[f]", Styles::shortcut_key()),
            fetch_label,
        ])),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(rows[1].width))).style(Styles::border()),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Select Agency for AI Report",
            Styles::text_muted(),
        )),
        rows[2],
    );

    let items: Vec<ListItem> = state
        .options()
        .iter()
        .map(|(_, name)| ListItem::new(name.to_string()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(state.selected_index());
    frame.render_stateful_widget(list, rows[3], &mut list_state);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[g]", Styles::shortcut_key()),
            Span::styled(" Generate AI Summary", Styles::text()),
        ])),
        rows[4],
    );
}

fn render_main<S: AgencySource>(frame: &mut Frame, area: Rect, dashboard: &Dashboard<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let active = dashboard.state().active_tab();
    let titles: Vec<Line> = [Tab::DataTable, Tab::AiInsights]
        .into_iter()
        .map(|tab| {
            let key = tab.index() + 1;
            let style = if tab == active {
                Style::default().fg(colors().accent).bold()
            } else {
                Styles::text_muted()
            };
            Line::from(vec![
                Span::styled(format!("[{key}]"), style),
                Span::styled(format!(" {} ", tab.title()), style),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        )
        .highlight_style(Style::default().fg(colors().accent))
        .select(active.index())
        .divider(Span::styled(" │ ", Style::default().fg(colors().muted)));
    frame.render_widget(tabs, chunks[0]);

    match active {
        Tab::DataTable => render_data_table(frame, chunks[1], &dashboard.table_view()),
        Tab::AiInsights => render_insights(frame, chunks[1], dashboard.state().report()),
    }
}

fn render_data_table(frame: &mut Frame, area: Rect, view: &TableView) {
    let numeric = !view.is_placeholder();
    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            Row::new(row.iter().enumerate().map(|(i, value)| {
                if numeric && i >= 2 {
                    Cell::from(Line::from(value.clone()).alignment(Alignment::Right))
                } else {
                    Cell::from(value.clone())
                }
            }))
        })
        .collect();

    let header = Row::new(view.columns.iter().copied())
        .style(Style::default().fg(colors().primary).bold())
        .bottom_margin(1);

    let widths: Vec<Constraint> = if numeric {
        vec![
            Constraint::Percentage(44),
            Constraint::Percentage(14),
            Constraint::Percentage(21),
            Constraint::Percentage(21),
        ]
    } else {
        vec![Constraint::Percentage(100)]
    };

    let title = if numeric {
        format!(" Agencies (first {}) ", view.rows.len())
    } else {
        " Agencies ".to_string()
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, area);
}

fn render_insights(frame: &mut Frame, area: Rect, report: Option<&str>) {
    let mut lines = vec![
        Line::styled("Executive Summary", Styles::section_title()),
        Line::from(""),
    ];
    if let Some(report) = report {
        let style = if report.starts_with("Error:") {
            Styles::error()
        } else {
            Styles::text()
        };
        lines.extend(report.lines().map(|line| Line::styled(line.to_string(), style)));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(paragraph, area);
}

fn render_status_bar<S: AgencySource>(frame: &mut Frame, area: Rect, dashboard: &Dashboard<S>) {
    let state = dashboard.state();
    let (phase_label, phase_style) = match state.phase() {
        Phase::Empty => ("No data", Styles::text_muted()),
        Phase::Loaded => ("Loaded", Styles::success()),
    };

    let mut spans = vec![
        Span::styled(" Agencies: ", Styles::text_muted()),
        Span::styled(
            state.table().len().to_string(),
            Style::default().fg(colors().primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(phase_label, phase_style),
    ];

    if let Some(name) = state.selected().and_then(|code| state.options().label(code)) {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled("Selected: ", Styles::text_muted()));
        spans.push(Span::styled(name.to_string(), Styles::text()));
    }

    if let Some(status) = state.status() {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(colors().accent),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::status_bar()),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = render_footer_hints(&[
        ("f", " fetch"),
        ("↑↓", " select"),
        ("g", " summary"),
        ("Tab", " switch tab"),
        ("q", " quit"),
    ]);
    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

fn render_size_warning(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::warning().bold()),
        Line::from(""),
        Line::from(format!("Current: {}x{}", area.width, area.height)),
        Line::from(format!("Required: {MIN_WIDTH}x{MIN_HEIGHT}")),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{NoOpSource, StaticSource};
    use crate::model::AgencyRecord;
    use ratatui::backend::TestBackend;

    fn draw<S: AgencySource>(dashboard: &Dashboard<S>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, dashboard)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dept_of_test() -> AgencyTable {
        vec![AgencyRecord::new("001", "Dept of Test", "DOT", 1000.0, 250.0)].into()
    }

    #[test]
    fn test_initial_screen_shows_controls_and_placeholder() {
        let screen = draw(&Dashboard::new(NoOpSource), 120, 30);
        assert!(screen.contains(PAGE_TITLE));
        assert!(screen.contains("Fetch Latest Data"));
        assert!(screen.contains("Select Agency for AI Report"));
        assert!(screen.contains("Generate AI Summary"));
        assert!(screen.contains("Data Table"));
        assert!(screen.contains("AI Insights"));
        assert!(screen.contains("Click 'Fetch Latest Data' to begin."));
    }

    #[test]
    fn test_loaded_screen_lists_agency() {
        let mut dashboard = Dashboard::new(StaticSource::new(dept_of_test()));
        dashboard.refresh();
        let screen = draw(&dashboard, 120, 30);
        assert!(screen.contains("Dept of Test"));
        assert!(screen.contains("1,000.00"));
        assert!(screen.contains("Agencies: 1"));
        assert!(!screen.contains("Click 'Fetch Latest Data' to begin."));
    }

    #[test]
    fn test_insights_tab_shows_report() {
        let mut dashboard = Dashboard::new(StaticSource::new(dept_of_test()));
        dashboard.refresh();
        dashboard.handle(UiEvent::GenerateSummary);
        let screen = draw(&dashboard, 120, 30);
        assert!(screen.contains("Executive Summary"));
        assert!(screen.contains("AI ANALYSIS REPORT:"));
        assert!(screen.contains("Current Budget Authority: $1,000.00"));
    }

    #[test]
    fn test_small_terminal_warning() {
        let screen = draw(&Dashboard::new(NoOpSource), 40, 10);
        assert!(screen.contains("Terminal too small"));
    }
}
