//! Tracing subscriber setup.
//!
//! The CLI logs to stderr. The TUI owns the terminal, so it only logs when a
//! file is configured. `RUST_LOG` overrides the configured level either way.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log level {level:?}: {message}")]
    InvalidFilter { level: String, message: String },
    #[error("could not open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_logging(level: &str, target: LogTarget<'_>) -> Result<(), LogError> {
    let filter = build_filter(level)?;
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?,
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LogError::OpenFile {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()?
        }
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LogError::InvalidFilter {
        level: level.to_string(),
        message: e.to_string(),
    })
}
