//! Configuration validation for spending-reporter.

use super::defaults::THEME_NAMES;
use super::types::{ApiConfig, AppConfig, DisplayConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.display.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            errors.push(ConfigError::new(
                "api.endpoint",
                format!("'{}' must be an http:// or https:// URL", self.endpoint),
            ));
        }

        if self.user_agent.trim().is_empty() {
            errors.push(ConfigError::new("api.user_agent", "must not be empty"));
        }

        if !(1..=300).contains(&self.timeout_secs) {
            errors.push(ConfigError::new(
                "api.timeout_secs",
                format!("{} is out of range (1-300)", self.timeout_secs),
            ));
        }

        errors
    }
}

impl Validatable for DisplayConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.row_limit == 0 {
            vec![ConfigError::new("display.row_limit", "must be at least 1")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !THEME_NAMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }

        if !(50..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!("{} is out of range (50-5000)", self.tick_rate_ms),
            ));
        }

        errors
    }
}
