//! Configuration types for spending-reporter.

use super::defaults::{
    DEFAULT_API_ENDPOINT, DEFAULT_API_USER_AGENT, DEFAULT_TABLE_ROWS, DEFAULT_THEME,
    DEFAULT_TICK_RATE_MS, DEFAULT_TIMEOUT_SECS,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Spending API connection settings
    pub api: ApiConfig,
    /// Table display settings
    pub display: DisplayConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

/// Spending API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Top-tier agencies endpoint URL
    pub endpoint: String,
    /// `User-Agent` header sent with the request
    pub user_agent: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            user_agent: DEFAULT_API_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Table display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of agencies shown in the data table
    #[schemars(range(min = 1))]
    pub row_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            row_limit: DEFAULT_TABLE_ROWS,
        }
    }
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 50, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values given on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub row_limit: Option<usize>,
    pub theme: Option<String>,
}

impl AppConfig {
    /// Apply command-line overrides on top of this configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(endpoint) = &overrides.endpoint {
            self.api.endpoint.clone_from(endpoint);
        }
        if let Some(user_agent) = &overrides.user_agent {
            self.api.user_agent.clone_from(user_agent);
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(rows) = overrides.row_limit {
            self.display.row_limit = rows;
        }
        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
    }
}
