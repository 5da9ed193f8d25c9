//! Terminal rendering

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::dashboard::DashboardReport;
use crate::dashboard::link::{Link, LinkContent};
use crate::dashboard::table::{Cell, RowState};
use crate::resolve::releases::LatestReleases;
use crate::resolve::servers::ListSource;
use crate::version::{CompareResult, compare_to_latest};

#[derive(Tabled)]
struct ServerRow {
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "BCDice-API")]
    api_version: String,
    #[tabled(rename = "BCDice")]
    library_version: String,
    #[tabled(rename = "Response")]
    response_time: String,
    #[tabled(rename = "Admin")]
    admin_name: String,
    #[tabled(rename = "Web")]
    admin_url: String,
    #[tabled(rename = "Email")]
    admin_email: String,
}

impl ServerRow {
    fn new(row: &RowState, releases: &LatestReleases) -> Self {
        Self {
            server: cell_text(&row.name, releases),
            api_version: cell_text(&row.api_version, releases),
            library_version: cell_text(&row.library_version, releases),
            response_time: cell_text(&row.response_time, releases),
            admin_name: cell_text(&row.admin_name, releases),
            admin_url: cell_text(&row.admin_url, releases),
            admin_email: cell_text(&row.admin_email, releases),
        }
    }
}

/// Render the report as plain text: release summary, status and server table
pub fn render(report: &DashboardReport) -> String {
    let mut lines = Vec::new();

    let latest: Vec<String> = report
        .release_cells
        .iter()
        .map(|(component, cell)| format!("{} {}", component.label(), plain_text(cell)))
        .collect();
    lines.push(format!("Latest releases: {}", latest.join(", ")));

    if report.source == ListSource::Remote {
        lines.push(format!("Server list: {}", report.server_list_url));
    }
    lines.push(format!("Status: {}", report.status));

    let rows = report
        .table
        .rows()
        .map(|row| ServerRow::new(row, &report.releases));
    let mut table = Table::new(rows);
    table.with(Style::modern());
    lines.push(table.to_string());

    lines.push(format!(
        "Generated at {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    lines.join("\n") + "\n"
}

/// Cell text, with version links annotated against the latest release
fn cell_text(cell: &Cell, releases: &LatestReleases) -> String {
    let text = plain_text(cell);

    let Some(release) = cell.as_link().and_then(|link| link.release.as_ref()) else {
        return text;
    };
    let Some(latest) = releases.get(release.component).version() else {
        return text;
    };

    match compare_to_latest(&release.version, latest) {
        CompareResult::Latest => format!("{} (latest)", text),
        CompareResult::Outdated => format!("{} (outdated)", text),
        CompareResult::Newer => format!("{} (newer)", text),
        CompareResult::Invalid => text,
    }
}

fn plain_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => text.clone(),
        Cell::Link(link) => link_text(link),
    }
}

fn link_text(link: &Link) -> String {
    match &link.content {
        LinkContent::Text(text) => text.clone(),
        LinkContent::Icon(_) => link
            .href
            .strip_prefix("mailto:")
            .unwrap_or(&link.href)
            .to_string(),
    }
}
