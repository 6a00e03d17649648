//! Logging setup
//!
//! Console output always goes to stdout. When a log file is configured, the
//! same events are also written, without ANSI colors, to a size-rotated file.

mod rotating;

pub use rotating::RotatingFile;

use std::io;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFileConfig;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,verdict_runner=debug,verdict_client=debug";

/// Installs the global tracing subscriber
pub fn init(log_file: Option<&LogFileConfig>) -> io::Result<()> {
    let file_layer = match log_file {
        Some(config) => {
            let file = RotatingFile::open(&config.path, config.max_bytes, config.backups)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(io::stdout))
        .with(file_layer)
        .init();

    Ok(())
}
