//! Standalone HTML page

use crate::dashboard::DashboardReport;
use crate::dashboard::link::{Link, LinkContent};
use crate::dashboard::table::{COLUMNS, Cell};
use crate::resolve::servers::ListSource;

const FONT_AWESOME_CSS: &str = "https://use.fontawesome.com/releases/v5.15.4/css/all.css";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 1em 2em; }
table { border-collapse: collapse; margin-bottom: 1em; }
th, td { border: 1px solid #ccc; padding: 0.25em 0.75em; text-align: left; }
td.response-time { text-align: right; }
footer { color: #888; font-size: small; }
";

const CLIPBOARD_SCRIPT: &str = "\
function toClipBoard(text) {
  navigator.clipboard.writeText(text).then(function () { alert('Copied!'); });
}
";

/// Render the report as a complete HTML document
pub fn render(report: &DashboardReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>BCDice-API server status</title>\n");
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        FONT_AWESOME_CSS
    ));
    html.push_str(&format!(
        "<style>\n{}{}</style>\n",
        STYLE,
        latest_style(report)
    ));
    html.push_str(&format!("<script>\n{}</script>\n", CLIPBOARD_SCRIPT));
    html.push_str("</head>\n<body>\n");

    html.push_str("<div id=\"header\">");
    if report.source == ListSource::Remote {
        html.push_str(&format!(
            "Server list: <a href=\"{0}\">{0}</a>",
            escape(&report.server_list_url)
        ));
    }
    html.push_str("</div>\n");

    html.push_str("<table id=\"latest-release\">\n");
    for (component, cell) in &report.release_cells {
        let class = match component.class_prefix() {
            "api" => "api-version",
            _ => "lib-version",
        };
        html.push_str(&format!(
            "<tr><th>{}</th><td class=\"{} target\">{}</td></tr>\n",
            escape(component.label()),
            class,
            render_cell(cell)
        ));
    }
    html.push_str("</table>\n");

    html.push_str(&format!(
        "<p id=\"status\">{}</p>\n",
        escape(&report.status.to_string())
    ));

    html.push_str("<table id=\"versions\">\n<thead><tr>");
    for (_, heading) in COLUMNS {
        html.push_str(&format!("<th>{}</th>", escape(heading)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in report.table.rows() {
        html.push_str("<tr>");
        for ((class, _), cell) in COLUMNS.iter().zip(row.cells()) {
            html.push_str(&format!(
                "<td class=\"{}\">{}</td>",
                class,
                render_cell(cell)
            ));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str(&format!(
        "<footer>Generated at {}</footer>\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>\n");

    html
}

/// Bold rule for each latest release class
fn latest_style(report: &DashboardReport) -> String {
    report
        .release_cells
        .iter()
        .filter_map(|(_, cell)| cell.as_link())
        .filter_map(|link| link.release.as_ref())
        .map(|release| format!(".{} {{ font-weight: bold; }}\n", release.class()))
        .collect()
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => escape(text),
        Cell::Link(link) => render_link(link),
    }
}

fn render_link(link: &Link) -> String {
    let mut attrs = format!("href=\"{}\"", escape(&link.href));

    let mut classes = Vec::new();
    if let Some(release) = &link.release {
        classes.push(release.class());
    }
    if link.latest {
        classes.push("latest".to_string());
    }
    if !classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", classes.join(" ")));
    }
    if link.new_context {
        attrs.push_str(" target=\"_blank\" rel=\"noopener\"");
    }

    let content = match &link.content {
        LinkContent::Text(text) => escape(text),
        LinkContent::Icon(icon) => format!("<i class=\"{}\"></i>", escape(icon)),
    };

    format!("<a {}>{}</a>", attrs, content)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
