//! Latest upstream releases from the GitHub Releases API

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::config::{DashboardConfig, GitHubConfig};
use crate::dashboard::link::{LinkBuilder, LinkContent, LinkKind};
use crate::dashboard::table::Cell;
use crate::fetch::{Fetcher, fetch_json};
use crate::version::extract_version_number;

/// Response from GitHub's latest release endpoint
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Tracked upstream components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The BCDice-API server
    Api,
    /// The BCDice dice-roll library
    Library,
}

impl Component {
    pub const ALL: [Component; 2] = [Component::Api, Component::Library];

    pub fn repository<'a>(&self, github: &'a GitHubConfig) -> &'a str {
        match self {
            Component::Api => &github.api_repository,
            Component::Library => &github.library_repository,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Component::Api => "BCDice-API",
            Component::Library => "BCDice",
        }
    }

    pub fn class_prefix(&self) -> &'static str {
        match self {
            Component::Api => "api",
            Component::Library => "bcdice",
        }
    }

    /// Prefix of release tag names on GitHub (`v2.0.1` for the library, `1.0.0` for the API)
    pub fn tag_prefix(&self) -> &'static str {
        match self {
            Component::Api => "",
            Component::Library => "v",
        }
    }

    pub fn link_kind(&self) -> LinkKind {
        match self {
            Component::Api => LinkKind::ApiVersion,
            Component::Library => LinkKind::LibraryVersion,
        }
    }
}

/// Outcome of a latest release lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestRelease {
    /// Canonical `major.minor.patch`
    Version(String),
    Error,
    Timeout,
}

impl LatestRelease {
    pub fn version(&self) -> Option<&str> {
        match self {
            LatestRelease::Version(v) => Some(v),
            _ => None,
        }
    }
}

/// Snapshot of the latest releases, fixed before any server is polled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestReleases {
    pub api: LatestRelease,
    pub library: LatestRelease,
}

impl LatestReleases {
    pub fn get(&self, component: Component) -> &LatestRelease {
        match component {
            Component::Api => &self.api,
            Component::Library => &self.library,
        }
    }

    /// Header cell for `component`: a link to the release, or the failure text
    pub fn cell(&self, component: Component, github: &GitHubConfig) -> Cell {
        match self.get(component) {
            LatestRelease::Version(version) => LinkBuilder::new(github, self)
                .build(
                    version,
                    component.link_kind(),
                    Some(LinkContent::Text(version.clone())),
                )
                .map(Cell::Link)
                .unwrap_or_else(|_| Cell::text("Error")),
            LatestRelease::Error => Cell::text("Error"),
            LatestRelease::Timeout => Cell::text("Timeout"),
        }
    }
}

/// Look up the latest release of both components concurrently
pub async fn resolve_latest_releases(
    fetcher: &dyn Fetcher,
    config: &DashboardConfig,
) -> LatestReleases {
    let (api, library) = tokio::join!(
        resolve_latest_release(fetcher, config, Component::Api),
        resolve_latest_release(fetcher, config, Component::Library),
    );

    LatestReleases { api, library }
}

async fn resolve_latest_release(
    fetcher: &dyn Fetcher,
    config: &DashboardConfig,
    component: Component,
) -> LatestRelease {
    let repository = component.repository(&config.github);
    let url = format!(
        "{}/repos/{}/releases/latest",
        config.github.api_base_url.trim_end_matches('/'),
        repository
    );

    let release = match fetch_json::<Release>(fetcher, &url, config.timeouts.release()).await {
        Ok(release) => release,
        Err(e) => {
            error!("Failed to fetch latest release of {}: {}", repository, e);
            return if e.is_timeout() {
                LatestRelease::Timeout
            } else {
                LatestRelease::Error
            };
        }
    };

    match extract_version_number(&release.tag_name) {
        Ok(version) => {
            info!("Latest release of {}: {}", repository, version);
            LatestRelease::Version(version)
        }
        Err(e) => {
            warn!("Latest release of {}: {}", repository, e);
            LatestRelease::Error
        }
    }
}
