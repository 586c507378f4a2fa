//! Unified error types for spending-reporter.
//!
//! Fetch failures never reach the dashboard (the data fetcher swallows them
//! into an empty table), but they are still modelled here so the fallible
//! client API and the command-line handlers can report them precisely.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spending-reporter operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReporterError {
    /// Errors while talking to the spending API
    #[error("Fetch failed: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors while building the agency summary
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("API returned error status {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Specific report error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("No agency with toptier code '{code}' in the current data")]
    RecordNotFound { code: String },

    #[error("{agency} reports a budget authority of zero; utilization is undefined")]
    ZeroBudgetAuthority { agency: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for spending-reporter operations
pub type Result<T> = std::result::Result<T, ReporterError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ReporterError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: message.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The fetch error kind, if this is a fetch error.
    #[must_use]
    pub const fn fetch_kind(&self) -> Option<&FetchErrorKind> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The report error kind, if this is a report error.
    #[must_use]
    pub const fn report_kind(&self) -> Option<&ReportErrorKind> {
        match self {
            Self::Report { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Message suitable for a one-line display in the dashboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Report { source, .. } => format!("Error: {source}"),
            Self::Fetch { source, .. } => format!("Error: {source}"),
            other => format!("Error: {other}"),
        }
    }
}

impl From<std::io::Error> for ReporterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = ReporterError::fetch("GET agencies", FetchErrorKind::Status(500));
        assert_eq!(err.to_string(), "Fetch failed: GET agencies");
        assert_eq!(err.fetch_kind(), Some(&FetchErrorKind::Status(500)));
        assert!(err.report_kind().is_none());
    }

    #[test]
    fn test_report_error_user_message() {
        let err = ReporterError::report(
            "summary",
            ReportErrorKind::RecordNotFound {
                code: "999".to_string(),
            },
        );
        assert_eq!(
            err.user_message(),
            "Error: No agency with toptier code '999' in the current data"
        );
    }

    #[test]
    fn test_io_error_source_chain() {
        use std::error::Error as _;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ReporterError::io("/tmp/x.yaml", "reading config", io);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("reading config"));
    }
}
