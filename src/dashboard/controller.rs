//! Page controller: sequences the dashboard stages

use std::fmt;

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use tracing::info;

use crate::config::DashboardConfig;
use crate::dashboard::poller::StatusPoller;
use crate::dashboard::table::{Cell, ServerTable};
use crate::fetch::Fetcher;
use crate::resolve::releases::{Component, LatestReleases, resolve_latest_releases};
use crate::resolve::servers::{ListSource, resolve_server_list};

/// Lifecycle stages, reported in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DownloadingReleases,
    DownloadingServerList,
    QueryingVersions,
    /// Querying versions after the server list download failed
    QueryingVersionsFromStaticList,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Stage::DownloadingReleases => "Downloading latest release info from GitHub",
            Stage::DownloadingServerList => "Downloading server list",
            Stage::QueryingVersions => "Querying running versions from the server list",
            Stage::QueryingVersionsFromStaticList => {
                "Failed to download server list, querying running versions from the static list"
            }
            Stage::Done => "Done",
        };
        f.write_str(text)
    }
}

/// Receives the status text updates of a run
#[cfg_attr(test, automock)]
pub trait StageObserver: Send + Sync {
    fn on_stage(&self, stage: Stage);
}

/// Observer that logs each stage
pub struct LogObserver;

impl StageObserver for LogObserver {
    fn on_stage(&self, stage: Stage) {
        info!("{}", stage);
    }
}

/// Result of one dashboard run
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub releases: LatestReleases,
    /// Header cells for the latest releases, in [`Component::ALL`] order
    pub release_cells: [(Component, Cell); 2],
    pub table: ServerTable,
    pub source: ListSource,
    pub server_list_url: String,
    pub status: Stage,
    pub generated_at: DateTime<Utc>,
}

pub struct Dashboard<'a> {
    fetcher: &'a dyn Fetcher,
    config: &'a DashboardConfig,
    observer: &'a dyn StageObserver,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        config: &'a DashboardConfig,
        observer: &'a dyn StageObserver,
    ) -> Self {
        Self {
            fetcher,
            config,
            observer,
        }
    }

    /// Run all stages: latest releases, server list, table, polling
    ///
    /// Each stage completes before the next one starts, so the release
    /// snapshot is fixed before any server is polled. Failures end up in the
    /// report's cells; a run always produces a report.
    pub async fn run(&self) -> DashboardReport {
        self.observer.on_stage(Stage::DownloadingReleases);
        let releases = resolve_latest_releases(self.fetcher, self.config).await;

        self.observer.on_stage(Stage::DownloadingServerList);
        let server_list = resolve_server_list(self.fetcher, self.config).await;

        self.observer.on_stage(match server_list.source {
            ListSource::Remote => Stage::QueryingVersions,
            ListSource::Fallback => Stage::QueryingVersionsFromStaticList,
        });
        let mut table = ServerTable::render(&server_list.servers);
        StatusPoller::new(self.fetcher, self.config, &releases)
            .poll_all(&mut table)
            .await;

        self.observer.on_stage(Stage::Done);

        let release_cells = Component::ALL
            .map(|component| (component, releases.cell(component, &self.config.github)));

        DashboardReport {
            releases,
            release_cells,
            table,
            source: server_list.source,
            server_list_url: self.config.server_list_url.clone(),
            status: Stage::Done,
            generated_at: Utc::now(),
        }
    }
}
