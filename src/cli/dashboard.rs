//! Dashboard command handler.

use super::{build_client, EXIT_SUCCESS};
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::fetch::AgencySource;
use crate::tui::{run_tui, set_theme, Theme};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Run the interactive dashboard against the live API.
pub fn run_dashboard(config: &AppConfig) -> Result<i32> {
    set_theme(Theme::from_name(&config.tui.theme));

    let source: Arc<dyn AgencySource> = Arc::new(build_client(&config.api)?);
    tracing::info!("Starting dashboard against {}", config.api.endpoint);

    let mut dashboard = Dashboard::new(source).with_row_limit(config.display.row_limit);
    run_tui(&mut dashboard, config.tui.tick_rate_ms).context("dashboard terminal error")?;

    Ok(EXIT_SUCCESS)
}
