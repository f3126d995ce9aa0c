//! Logging initialization and configuration.
//!
//! Diagnostics go to stderr so that stdout only carries the compaction
//! summary. Optionally a second copy is written to a log file.
//!
//! # Configuration
//!
//! The log level defaults to `warn` and is raised by `-v` flags. The
//! `RUST_LOG` environment variable overrides both when set:
//! - `RUST_LOG=debug` - Show every replaced duplicate
//! - `RUST_LOG=info` - Show load/save totals
//! - `RUST_LOG=warn` - Show malformed records only
//! - `RUST_LOG=error` - Show errors only

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging settings taken from the command line.
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    /// Number of `-v` flags given.
    pub verbosity: u8,
    /// Directory for an additional log file.
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub fn default_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Keeps the non-blocking writers alive; drop it at the end of `main`
/// so buffered lines are flushed.
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Build the file name for one run, e.g. `histshrink.2024-12-06-14-30-25.log`.
pub fn log_file_name() -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    format!("histshrink.{}.log", timestamp)
}

fn create_log_file(log_dir: &Path) -> Result<(fs::File, PathBuf)> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let log_path = log_dir.join(log_file_name());
    let file = fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;
    Ok((file, log_path))
}

/// Initialize the logging system.
///
/// Fails if the log file cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuards> {
    let mut guards = Vec::new();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_level()));

    let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    guards.push(stderr_guard);
    let stderr_layer = fmt::layer()
        .with_writer(stderr_writer)
        .with_target(false)
        .without_time();

    let mut log_path = None;
    let file_layer = match &config.log_dir {
        Some(dir) => {
            let (file, path) = create_log_file(dir)?;
            let (file_writer, file_guard) = tracing_appender::non_blocking(file);
            guards.push(file_guard);
            log_path = Some(path);
            Some(
                fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false) // No ANSI colors in log files
                    .with_target(true)
                    .with_line_number(true)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(path) = log_path {
        tracing::info!("Logging initialized - writing to {}", path.display());
    }

    Ok(LogGuards { _guards: guards })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_follows_verbosity() {
        let mut config = LogConfig::default();
        assert_eq!(config.default_level(), "warn");
        config.verbosity = 1;
        assert_eq!(config.default_level(), "info");
        config.verbosity = 3;
        assert_eq!(config.default_level(), "debug");
    }

    #[test]
    fn test_log_file_name_shape() {
        let name = log_file_name();
        assert!(name.starts_with("histshrink."));
        assert!(name.ends_with(".log"));
        // histshrink. + YYYY-mm-dd-HH-MM-SS + .log
        assert_eq!(name.len(), "histshrink.".len() + 19 + ".log".len());
    }

    #[test]
    fn test_create_log_file_makes_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("logs").join("nested");
        let (_file, path) = create_log_file(&nested)?;
        assert!(path.exists());
        assert!(path.starts_with(&nested));
        Ok(())
    }
}
