//! Per-server version and admin polling

use std::time::{Duration, Instant};

use futures::future::join_all;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::dashboard::link::LinkBuilder;
use crate::dashboard::table::{Cell, RowState, ServerTable};
use crate::fetch::{Fetcher, fetch_json};
use crate::resolve::releases::{Component, LatestReleases};

/// Shown when a server reports a version that is not a version tag
const UNKNOWN_VERSION: &str = "Unknown";

/// Response from `<base>/v1/version`
#[derive(Debug, Deserialize)]
struct VersionResponse {
    api: String,
    bcdice: String,
}

/// Response from `<base>/v1/admin`
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AdminInfo {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

/// Polls every row of a table against a fixed release snapshot
pub struct StatusPoller<'a> {
    fetcher: &'a dyn Fetcher,
    config: &'a DashboardConfig,
    links: LinkBuilder<'a>,
}

impl<'a> StatusPoller<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        config: &'a DashboardConfig,
        releases: &'a LatestReleases,
    ) -> Self {
        Self {
            fetcher,
            config,
            links: LinkBuilder::new(&config.github, releases),
        }
    }

    /// Poll all rows at once
    ///
    /// Every row is polled concurrently with no limit on fan-out. A failing
    /// server only changes its own row.
    pub async fn poll_all(&self, table: &mut ServerTable) {
        let futures = table.rows_mut().map(|row| self.poll_row(row));
        join_all(futures).await;
    }

    /// Query one server's version endpoint, then its admin endpoint
    pub async fn poll_row(&self, row: &mut RowState) {
        let url = self.config.version_url(&row.base_url);
        let timeout = self.config.timeouts.version();
        let start = Instant::now();

        match fetch_json::<VersionResponse>(self.fetcher, &url, timeout).await {
            Ok(versions) => {
                let elapsed = start.elapsed();
                debug!(
                    "{}: api {}, bcdice {} in {:?}",
                    row.base_url, versions.api, versions.bcdice, elapsed
                );

                row.name = Cell::Link(self.links.clipboard(&row.base_url));
                row.api_version = self.version_cell(&row.base_url, &versions.api, Component::Api);
                row.library_version =
                    self.version_cell(&row.base_url, &versions.bcdice, Component::Library);
                row.response_time = Cell::text(format_response_time(elapsed));

                self.poll_admin(row).await;
            }
            Err(e) => {
                warn!("Failed to query version of {}: {}", row.base_url, e);
                row.api_version = Cell::text(e.cell_text());
                row.library_version = Cell::text(e.cell_text());
            }
        }
    }

    async fn poll_admin(&self, row: &mut RowState) {
        let url = self.config.admin_url(&row.base_url);

        let timeout = self.config.timeouts.admin();
        let admin = match fetch_json::<AdminInfo>(self.fetcher, &url, timeout).await {
            Ok(admin) => admin,
            Err(e) => {
                warn!("Failed to query admin of {}: {}", row.base_url, e);
                row.admin_name = Cell::text(e.cell_text());
                return;
            }
        };

        if let Some(name) = admin.name {
            row.admin_name = Cell::Text(name);
        }
        if let Some(url) = admin.url {
            row.admin_url = Cell::Link(self.links.admin_url(&url));
        }
        if let Some(email) = admin.email {
            row.admin_email = Cell::Link(self.links.admin_email(&email));
        }
    }

    fn version_cell(&self, base_url: &str, tag: &str, component: Component) -> Cell {
        match self.links.version(tag, component) {
            Ok(link) => Cell::Link(link),
            Err(e) => {
                warn!("{} reports {} version: {}", base_url, component.label(), e);
                Cell::text(UNKNOWN_VERSION)
            }
        }
    }
}

/// Elapsed time rounded to whole milliseconds, e.g. `"123ms"`
fn format_response_time(elapsed: Duration) -> String {
    format!("{}ms", (elapsed.as_secs_f64() * 1000.0).round() as u64)
}
