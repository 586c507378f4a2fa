//! USAspending API HTTP client.

use super::response::ToptierAgenciesResponse;
use super::AgencySource;
use crate::error::{FetchErrorKind, ReporterError, Result};
use crate::model::AgencyTable;
use reqwest::blocking::Client;
use std::time::Duration;

/// Top-tier agency reference endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.usaspending.gov/api/v2/references/toptier_agencies/";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "MyPythonApp/1.0";

/// USAspending client configuration.
#[derive(Debug, Clone)]
pub struct UsaSpendingClientConfig {
    /// Full URL of the top-tier agencies endpoint
    pub endpoint: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for UsaSpendingClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl UsaSpendingClientConfig {
    /// Build a client config from the `api` section of the app config.
    #[must_use]
    pub fn from_api_config(api: &crate::config::ApiConfig) -> Self {
        Self {
            endpoint: api.endpoint.clone(),
            user_agent: api.user_agent.clone(),
            timeout: Duration::from_secs(api.timeout_secs),
        }
    }
}

/// HTTP client for the USAspending reference API.
pub struct UsaSpendingClient {
    client: Client,
    config: UsaSpendingClientConfig,
}

impl UsaSpendingClient {
    /// Create a new client.
    pub fn new(config: UsaSpendingClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e, config.timeout))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &UsaSpendingClientConfig {
        &self.config
    }

    /// Fetch the agency table, returning any failure to the caller.
    pub fn try_fetch(&self) -> Result<AgencyTable> {
        let url = &self.config.endpoint;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network_error("Failed to fetch agencies", &e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReporterError::fetch(
                format!("GET {url}"),
                FetchErrorKind::Status(status.as_u16()),
            ));
        }

        let body: ToptierAgenciesResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                network_error("Reading response body", &e, self.config.timeout)
            } else {
                ReporterError::fetch(
                    "parsing response",
                    FetchErrorKind::InvalidResponse(e.to_string()),
                )
            }
        })?;

        Ok(AgencyTable::from(body))
    }
}

impl AgencySource for UsaSpendingClient {
    fn fetch(&self) -> AgencyTable {
        match self.try_fetch() {
            Ok(table) => {
                tracing::info!("Fetched {} agencies from {}", table.len(), self.config.endpoint);
                table
            }
            Err(e) => {
                match e.fetch_kind() {
                    Some(kind) => tracing::warn!("Error fetching data: {}: {}", e, kind),
                    None => tracing::warn!("Error fetching data: {}", e),
                }
                AgencyTable::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "USAspending"
    }
}

/// Helper to convert reqwest errors to fetch errors
fn network_error(msg: &str, err: &reqwest::Error, timeout: Duration) -> ReporterError {
    let kind = if err.is_timeout() {
        FetchErrorKind::Timeout(timeout.as_secs())
    } else {
        FetchErrorKind::Network(err.to_string())
    };
    ReporterError::fetch(msg, kind)
}
