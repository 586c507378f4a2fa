//! Default values for spending-reporter configuration.

use crate::fetch::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::reports::DEFAULT_ROW_LIMIT;

/// Default API endpoint.
pub const DEFAULT_API_ENDPOINT: &str = DEFAULT_ENDPOINT;

/// Default `User-Agent` header value.
pub const DEFAULT_API_USER_AGENT: &str = DEFAULT_USER_AGENT;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of rows in the data table.
pub const DEFAULT_TABLE_ROWS: usize = DEFAULT_ROW_LIMIT;

/// Default TUI theme.
pub const DEFAULT_THEME: &str = "dark";

/// Default TUI event poll interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Recognized theme names.
pub const THEME_NAMES: [&str; 3] = ["dark", "light", "high-contrast"];
