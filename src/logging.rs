//! Tracing setup: JSON lines to a log file, optionally readable lines to stderr

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{LOG_FILE_NAME, data_dir};

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Create `dir` and return the log file path inside it
fn prepare_log_file(dir: &Path) -> Option<PathBuf> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Some(dir.join(LOG_FILE_NAME)),
        Err(e) => {
            eprintln!("Failed to create log directory {}: {}", dir.display(), e);
            None
        }
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer when dropped and must be kept
/// alive for the whole run. If the data directory cannot be created, only the
/// stderr layer is installed (when `verbose`).
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    let dir = data_dir();
    let log_file = prepare_log_file(&dir);

    let (file_layer, guard) = log_file
        .is_some()
        .then(|| {
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(env_filter(verbose));
            (layer, guard)
        })
        .unzip();

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter(verbose))
    });

    match tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        Ok(()) => {
            if let Some(path) = &log_file {
                info!("Logging to {}", path.display());
            }
        }
        Err(e) => eprintln!("Failed to initialize logging: {}", e),
    }

    guard
}
