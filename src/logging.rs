// Logging setup - stderr by default, daily rotating file when asked
// RUST_LOG always wins over the -v count

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "push-sounds.log";

pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,push_sounds=info",
        _ => "debug,push_sounds=debug",
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered file output is lost.
pub fn init(verbosity: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_env_filter(filter)
                .finish();

            tracing::subscriber::set_global_default(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_env_filter(filter)
                .finish();

            tracing::subscriber::set_global_default(subscriber)?;
            Ok(None)
        }
    }
}
