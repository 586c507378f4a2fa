//! Interactive terminal dashboard using ratatui.
//!
//! The view layer is thin: key presses are mapped to
//! [`UiEvent`](crate::dashboard::UiEvent)s, fed to a
//! [`Dashboard`](crate::dashboard::Dashboard), and the whole frame is drawn
//! from the resulting state. Fetches run on a worker thread and report back
//! through a channel, so the UI stays responsive while the API is slow.

mod events;
pub mod theme;
mod ui;

pub use events::{map_key, Event, EventHandler};
pub use theme::{colors, current_theme_name, set_theme, ColorScheme, Styles, Theme};
pub use ui::{render, run_tui, SharedDashboard, MIN_HEIGHT, MIN_WIDTH};
