//! Output rendering for a finished dashboard
//!
//! - [`html`]: Standalone HTML page with the release header and server table
//! - [`text`]: Plain text table for terminals

pub mod html;
pub mod text;

use clap::ValueEnum;

use crate::dashboard::DashboardReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

pub fn render(report: &DashboardReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => html::render(report),
        OutputFormat::Text => text::render(report),
    }
}
