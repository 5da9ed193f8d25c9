use std::path::PathBuf;

use bcdice_status::app::{print_servers, run_dashboard};
use bcdice_status::config::DashboardConfig;
use bcdice_status::logging;
use bcdice_status::render::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bcdice-status")]
#[command(version, about = "Status dashboard for BCDice API servers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the server list URL
    #[arg(long, global = true)]
    server_list_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Write the dashboard to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved server list
    Servers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(url) = cli.server_list_url {
        config.server_list_url = url;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None => runtime.block_on(run_dashboard(&config, cli.format, cli.output.as_deref())),
        Some(Command::Servers) => runtime.block_on(print_servers(&config)),
    }
}
