//! Terminal event polling and key bindings.

use crate::dashboard::{Tab, UiEvent};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Terminal event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (also used to poll for fetch completion)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Poll interval
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler polling every `tick_rate` milliseconds
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Map a key press to a dashboard event.
pub fn map_key(key: KeyEvent) -> Option<UiEvent> {
    // Windows reports both press and release.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(UiEvent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('f' | 'r') | KeyCode::F(5) => Some(UiEvent::Refresh),
        KeyCode::Char('g') | KeyCode::Enter => Some(UiEvent::GenerateSummary),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrevious),
        KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::NextTab),
        KeyCode::Char('1') => Some(UiEvent::ShowTab(Tab::DataTable)),
        KeyCode::Char('2') => Some(UiEvent::ShowTab(Tab::AiInsights)),
        _ => None,
    }
}
