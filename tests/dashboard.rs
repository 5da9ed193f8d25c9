//! Dashboard E2E tests against a fake fetcher

mod helper;

use std::time::Duration;

use serde_json::json;

use bcdice_status::config::{DashboardConfig, STATIC_SERVER_LIST};
use bcdice_status::dashboard::link::LinkContent;
use bcdice_status::dashboard::{Cell, Dashboard, LogObserver, Stage};
use bcdice_status::fetch::FetchError;
use bcdice_status::render::{OutputFormat, render};
use bcdice_status::resolve::{LatestRelease, ListSource};
use helper::FakeFetcher;

const API_RELEASE_URL: &str = "https://api.github.com/repos/ysakasin/bcdice-api/releases/latest";
const LIBRARY_RELEASE_URL: &str = "https://api.github.com/repos/bcdice/BCDice/releases/latest";
const SERVER_LIST_URL: &str =
    "https://raw.githubusercontent.com/bcdice/bcdice-api-servers/master/servers.yaml";

fn with_releases(fetcher: FakeFetcher) -> FakeFetcher {
    fetcher
        .with_json(API_RELEASE_URL, json!({"tag_name": "1.2.3"}))
        .with_json(LIBRARY_RELEASE_URL, json!({"tag_name": "v4.5.0"}))
}

#[tokio::test]
async fn run_renders_one_row_per_server_and_isolates_failures() {
    let fetcher = with_releases(FakeFetcher::new())
        .with_text(SERVER_LIST_URL, "- https://a.example\n- https://b.example\n")
        .with_json(
            "https://a.example/v1/version",
            json!({"api": "1.2.3", "bcdice": "4.5.0"}),
        )
        .with_json("https://a.example/v1/admin", json!({"name": "ops"}))
        .with_error(
            "https://b.example/v1/version",
            FetchError::Network("connection refused".to_string()),
        );
    let config = DashboardConfig::default();

    let report = Dashboard::new(&fetcher, &config, &LogObserver).run().await;

    assert_eq!(report.table.len(), 2);
    let rows: Vec<_> = report.table.rows().collect();

    assert_eq!(rows[0].base_url, "https://a.example");
    let api = rows[0].api_version.as_link().unwrap();
    assert_eq!(api.content, LinkContent::Text("1.2.3".to_string()));
    assert!(api.latest);
    let library = rows[0].library_version.as_link().unwrap();
    assert_eq!(library.content, LinkContent::Text("4.5.0".to_string()));
    assert!(library.latest);
    assert_eq!(rows[0].admin_name, Cell::text("ops"));

    assert_eq!(rows[1].base_url, "https://b.example");
    assert_eq!(rows[1].api_version, Cell::text("Error"));
    assert_eq!(rows[1].library_version, Cell::text("Error"));
    assert!(rows[1].response_time.is_empty());

    assert_eq!(report.source, ListSource::Remote);
    assert_eq!(report.status, Stage::Done);
}

#[tokio::test]
async fn run_resolves_releases_before_server_list_before_polling() {
    let fetcher = with_releases(FakeFetcher::new())
        .with_text(SERVER_LIST_URL, "- https://a.example\n")
        .with_json(
            "https://a.example/v1/version",
            json!({"api": "1.2.3", "bcdice": "4.5.0"}),
        )
        .with_json("https://a.example/v1/admin", json!({}));
    let config = DashboardConfig::default();

    Dashboard::new(&fetcher, &config, &LogObserver).run().await;

    let requests = fetcher.requests();
    assert_eq!(requests.len(), 5);
    let mut releases = requests[..2].to_vec();
    releases.sort();
    let mut expected = vec![API_RELEASE_URL, LIBRARY_RELEASE_URL];
    expected.sort();
    assert_eq!(releases, expected);
    assert_eq!(requests[2], SERVER_LIST_URL);
    assert_eq!(requests[3], "https://a.example/v1/version");
    assert_eq!(requests[4], "https://a.example/v1/admin");
}

#[tokio::test]
async fn run_keeps_and_polls_a_row_per_duplicate_entry() {
    let fetcher = with_releases(FakeFetcher::new())
        .with_text(
            SERVER_LIST_URL,
            "- https://a.example\n- https://b.example\n- https://a.example\n",
        )
        .with_json(
            "https://a.example/v1/version",
            json!({"api": "1.2.3", "bcdice": "4.5.0"}),
        )
        .with_json("https://a.example/v1/admin", json!({"name": "ops"}))
        .with_json(
            "https://b.example/v1/version",
            json!({"api": "1.2.3", "bcdice": "4.5.0"}),
        )
        .with_json("https://b.example/v1/admin", json!({"name": "ops"}));
    let config = DashboardConfig::default();

    let report = Dashboard::new(&fetcher, &config, &LogObserver).run().await;

    assert_eq!(report.table.len(), 3);
    let base_urls: Vec<_> = report.table.rows().map(|row| row.base_url.as_str()).collect();
    assert_eq!(
        base_urls,
        vec!["https://a.example", "https://b.example", "https://a.example"]
    );
    for row in report.table.rows() {
        assert!(row.api_version.as_link().unwrap().latest);
        assert_eq!(row.admin_name, Cell::text("ops"));
    }

    let version_requests = fetcher
        .requests()
        .iter()
        .filter(|url| *url == "https://a.example/v1/version")
        .count();
    assert_eq!(version_requests, 2);

    let html = render(&report, OutputFormat::Html);
    assert_eq!(html.matches("<td class=\"server-name\">").count(), 3);
}

#[tokio::test]
async fn run_falls_back_to_static_list() {
    let fetcher = with_releases(FakeFetcher::new()).with_error(
        SERVER_LIST_URL,
        FetchError::Timeout(Duration::from_millis(1000)),
    );
    let config = DashboardConfig::default();

    let report = Dashboard::new(&fetcher, &config, &LogObserver).run().await;

    assert_eq!(report.source, ListSource::Fallback);
    let base_urls: Vec<_> = report.table.rows().map(|row| row.base_url.as_str()).collect();
    assert_eq!(base_urls, STATIC_SERVER_LIST.to_vec());

    let html = render(&report, OutputFormat::Html);
    assert!(html.contains("<div id=\"header\"></div>"));
    assert_eq!(html.matches("<td class=\"server-name\">").count(), 6);
}

#[tokio::test]
async fn run_marks_timed_out_server_only() {
    let fetcher = with_releases(FakeFetcher::new())
        .with_text(
            SERVER_LIST_URL,
            "- https://a.example\n- https://slow.example\n- https://c.example\n",
        )
        .with_json(
            "https://a.example/v1/version",
            json!({"api": "1.2.2", "bcdice": "4.5.0"}),
        )
        .with_error(
            "https://slow.example/v1/version",
            FetchError::Timeout(Duration::from_millis(5000)),
        )
        .with_json(
            "https://c.example/v1/version",
            json!({"api": "1.2.3", "bcdice": "v4.5.0"}),
        )
        .with_error(
            "https://c.example/v1/admin",
            FetchError::Timeout(Duration::from_millis(10000)),
        );
    let config = DashboardConfig::default();

    let report = Dashboard::new(&fetcher, &config, &LogObserver).run().await;

    let slow = report.table.row("https://slow.example").unwrap();
    assert_eq!(slow.api_version, Cell::text("Timeout"));
    assert_eq!(slow.library_version, Cell::text("Timeout"));

    let a = report.table.row("https://a.example").unwrap();
    assert!(!a.api_version.as_link().unwrap().latest);
    assert!(a.library_version.as_link().unwrap().latest);
    assert_eq!(a.admin_name, Cell::text("Error"));

    let c = report.table.row("https://c.example").unwrap();
    assert!(c.api_version.as_link().unwrap().latest);
    assert!(c.library_version.as_link().unwrap().latest);
    assert_eq!(c.admin_name, Cell::text("Timeout"));
}

#[tokio::test]
async fn run_keeps_polling_when_releases_fail() {
    let fetcher = FakeFetcher::new()
        .with_error(
            API_RELEASE_URL,
            FetchError::Timeout(Duration::from_millis(5000)),
        )
        .with_text(SERVER_LIST_URL, "- https://a.example\n")
        .with_json(
            "https://a.example/v1/version",
            json!({"api": "1.2.3", "bcdice": "4.5.0"}),
        );
    let config = DashboardConfig::default();

    let report = Dashboard::new(&fetcher, &config, &LogObserver).run().await;

    assert_eq!(report.releases.api, LatestRelease::Timeout);
    assert_eq!(report.releases.library, LatestRelease::Error);
    let row = report.table.row("https://a.example").unwrap();
    assert!(!row.api_version.as_link().unwrap().latest);
    assert!(!row.library_version.as_link().unwrap().latest);

    let text = render(&report, OutputFormat::Text);
    assert!(text.starts_with("Latest releases: BCDice-API Timeout, BCDice Error\n"));
}
