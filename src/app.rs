//! Command entry points

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, LogObserver};
use crate::fetch::HttpFetcher;
use crate::render::{OutputFormat, render};
use crate::resolve::servers::{ListSource, resolve_server_list};

/// Run the dashboard once and write it to `output`, or stdout
pub async fn run_dashboard(
    config: &DashboardConfig,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new();
    let report = Dashboard::new(&fetcher, config, &LogObserver).run().await;
    let rendered = render(&report, format);

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} servers to {}", report.table.len(), path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Print the resolved server list, one base URL per line
pub async fn print_servers(config: &DashboardConfig) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new();
    let list = resolve_server_list(&fetcher, config).await;

    if list.source == ListSource::Fallback {
        warn!("Server list download failed, showing the static list");
        eprintln!("Failed to download {}; using the static list", config.server_list_url);
    }
    for server in &list.servers {
        println!("{}", server);
    }

    Ok(())
}
