//! Startup lookups that the dashboard depends on
//!
//! - [`releases`]: Latest upstream releases, the baseline for highlighting
//! - [`servers`]: Server list, with a static fallback

pub mod releases;
pub mod servers;

pub use releases::{Component, LatestRelease, LatestReleases, resolve_latest_releases};
pub use servers::{ListSource, ServerList, resolve_server_list};
