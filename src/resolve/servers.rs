//! Server list download with a static fallback

use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::fetch::{FetchError, Fetcher, fetch_text};

/// Where the resolved server list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    Remote,
    /// The remote document failed; the static list was used instead
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerList {
    pub servers: Vec<String>,
    pub source: ListSource,
}

/// Download the server list, falling back to the configured static list on
/// any failure
pub async fn resolve_server_list(fetcher: &dyn Fetcher, config: &DashboardConfig) -> ServerList {
    match download_server_list(fetcher, config).await {
        Ok(servers) => {
            info!(
                "Downloaded {} servers from {}",
                servers.len(),
                config.server_list_url
            );
            ServerList {
                servers,
                source: ListSource::Remote,
            }
        }
        Err(e) => {
            warn!(
                "Failed to download server list from {}: {}. Using the static list",
                config.server_list_url, e
            );
            ServerList {
                servers: config.static_servers.clone(),
                source: ListSource::Fallback,
            }
        }
    }
}

async fn download_server_list(
    fetcher: &dyn Fetcher,
    config: &DashboardConfig,
) -> Result<Vec<String>, FetchError> {
    let document = fetch_text(
        fetcher,
        &config.server_list_url,
        config.timeouts.server_list(),
    )
    .await?;
    parse_server_list(&document)
}

/// Parse a YAML sequence of server base URLs
pub fn parse_server_list(document: &str) -> Result<Vec<String>, FetchError> {
    serde_yaml::from_str(document).map_err(|e| FetchError::Decode(e.to_string()))
}
