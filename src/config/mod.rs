//! Configuration module for spending-reporter.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.spending-reporter.yaml` file in your working directory or
//! `~/.config/spending-reporter/`:
//!
//! ```yaml
//! api:
//!   timeout_secs: 20
//! display:
//!   row_limit: 10
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_API_ENDPOINT, DEFAULT_API_USER_AGENT, DEFAULT_TABLE_ROWS, DEFAULT_THEME,
    DEFAULT_TICK_RATE_MS, DEFAULT_TIMEOUT_SECS, THEME_NAMES,
};
pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{ApiConfig, AppConfig, ConfigOverrides, DisplayConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

/// JSON schema for [`AppConfig`], pretty-printed.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
