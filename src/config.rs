use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for downloading the server list in milliseconds (1 second)
pub const SERVER_LIST_TIMEOUT_MS: u64 = 1_000;

/// Timeout for GitHub latest release lookups in milliseconds (5 seconds)
pub const RELEASE_TIMEOUT_MS: u64 = 5_000;

/// Timeout for the per-server version endpoint in milliseconds (5 seconds)
pub const VERSION_TIMEOUT_MS: u64 = 5_000;

/// Timeout for the per-server admin endpoint in milliseconds (10 seconds)
pub const ADMIN_TIMEOUT_MS: u64 = 10_000;

// =============================================================================
// Endpoints
// =============================================================================

pub const DEFAULT_SERVER_LIST_URL: &str =
    "https://raw.githubusercontent.com/bcdice/bcdice-api-servers/master/servers.yaml";

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

pub const DEFAULT_GITHUB_WEB_BASE_URL: &str = "https://github.com";

/// Path segment placed between a server's base URL and its endpoints
pub const DEFAULT_API_PATH_PREFIX: &str = "/v1";

pub const API_REPOSITORY: &str = "ysakasin/bcdice-api";

pub const LIBRARY_REPOSITORY: &str = "bcdice/BCDice";

/// Servers used when the server list cannot be downloaded
pub const STATIC_SERVER_LIST: [&str; 6] = [
    "https://bcdice.kazagakure.net",
    "https://bcdice.herokuapp.com",
    "https://www.taruki.com/bcdice-api",
    "https://bcdice-api.conos.jp",
    "https://bcdice.onlinesession.app",
    "https://bcdice.trpg.net",
];

pub const LOG_FILE_NAME: &str = "bcdice-status.log";

/// Dashboard configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub server_list_url: String,
    pub static_servers: Vec<String>,
    pub api_path_prefix: String,
    pub timeouts: TimeoutConfig,
    pub github: GitHubConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_list_url: DEFAULT_SERVER_LIST_URL.to_string(),
            static_servers: STATIC_SERVER_LIST.iter().map(|s| s.to_string()).collect(),
            api_path_prefix: DEFAULT_API_PATH_PREFIX.to_string(),
            timeouts: TimeoutConfig::default(),
            github: GitHubConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn version_url(&self, base_url: &str) -> String {
        self.endpoint_url(base_url, "version")
    }

    pub fn admin_url(&self, base_url: &str) -> String {
        self.endpoint_url(base_url, "admin")
    }

    fn endpoint_url(&self, base_url: &str, endpoint: &str) -> String {
        let prefix = self.api_path_prefix.trim_matches('/');
        let base = base_url.trim_end_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", base, endpoint)
        } else {
            format!("{}/{}/{}", base, prefix, endpoint)
        }
    }
}

/// Per-call timeouts in milliseconds
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeoutConfig {
    pub server_list: u64,
    pub release: u64,
    pub version: u64,
    pub admin: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            server_list: SERVER_LIST_TIMEOUT_MS,
            release: RELEASE_TIMEOUT_MS,
            version: VERSION_TIMEOUT_MS,
            admin: ADMIN_TIMEOUT_MS,
        }
    }
}

impl TimeoutConfig {
    pub fn server_list(&self) -> Duration {
        Duration::from_millis(self.server_list)
    }

    pub fn release(&self) -> Duration {
        Duration::from_millis(self.release)
    }

    pub fn version(&self) -> Duration {
        Duration::from_millis(self.version)
    }

    pub fn admin(&self) -> Duration {
        Duration::from_millis(self.admin)
    }
}

/// Upstream repositories whose latest releases form the baseline
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub web_base_url: String,
    pub api_repository: String,
    pub library_repository: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            web_base_url: DEFAULT_GITHUB_WEB_BASE_URL.to_string(),
            api_repository: API_REPOSITORY.to_string(),
            library_repository: LIBRARY_REPOSITORY.to_string(),
        }
    }
}

/// Returns the path to the data directory for bcdice-status.
/// Uses $XDG_DATA_HOME/bcdice-status if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/bcdice-status,
/// or ./bcdice-status if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("bcdice-status")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn dashboard_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<DashboardConfig>(json!({
            "timeouts": {
                "admin": 2000
            }
        }))
        .unwrap();

        assert_eq!(result.timeouts.admin, 2000);
        assert_eq!(result.timeouts.version, VERSION_TIMEOUT_MS);
        assert_eq!(result.server_list_url, DEFAULT_SERVER_LIST_URL);
        assert_eq!(result.static_servers.len(), 6);
        assert_eq!(result.github, GitHubConfig::default());
    }

    #[test]
    fn dashboard_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<DashboardConfig>(json!({
            "serverListUrl": "https://example.com/servers.yaml",
            "staticServers": ["https://a.example"],
            "apiPathPrefix": "",
            "timeouts": {
                "serverList": 100,
                "release": 200,
                "version": 300,
                "admin": 400
            },
            "github": {
                "apiBaseUrl": "http://localhost:1234",
                "webBaseUrl": "http://localhost:5678",
                "apiRepository": "owner/api",
                "libraryRepository": "owner/lib"
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            DashboardConfig {
                server_list_url: "https://example.com/servers.yaml".to_string(),
                static_servers: vec!["https://a.example".to_string()],
                api_path_prefix: String::new(),
                timeouts: TimeoutConfig {
                    server_list: 100,
                    release: 200,
                    version: 300,
                    admin: 400,
                },
                github: GitHubConfig {
                    api_base_url: "http://localhost:1234".to_string(),
                    web_base_url: "http://localhost:5678".to_string(),
                    api_repository: "owner/api".to_string(),
                    library_repository: "owner/lib".to_string(),
                },
            }
        );
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"apiPathPrefix": "/v2"}}"#).unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();

        assert_eq!(config.api_path_prefix, "/v2");
        assert_eq!(config.timeouts, TimeoutConfig::default());
    }

    #[test]
    fn load_fails_for_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(DashboardConfig::load(file.path()).is_err());
    }

    #[rstest]
    #[case("/v1", "https://a.example", "https://a.example/v1/version")]
    #[case("/v1", "https://a.example/", "https://a.example/v1/version")]
    #[case("v1/", "https://a.example", "https://a.example/v1/version")]
    #[case("", "https://a.example", "https://a.example/version")]
    #[case(
        "/v1",
        "https://www.taruki.com/bcdice-api",
        "https://www.taruki.com/bcdice-api/v1/version"
    )]
    fn version_url_joins_base_prefix_and_endpoint(
        #[case] prefix: &str,
        #[case] base_url: &str,
        #[case] expected: &str,
    ) {
        let config = DashboardConfig {
            api_path_prefix: prefix.to_string(),
            ..Default::default()
        };

        assert_eq!(config.version_url(base_url), expected);
    }

    #[test]
    fn admin_url_uses_default_prefix() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.admin_url("https://bcdice.trpg.net"),
            "https://bcdice.trpg.net/v1/admin"
        );
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/bcdice-status"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/bcdice-status"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./bcdice-status"));
    }
}
