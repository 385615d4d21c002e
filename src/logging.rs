//! Logging initialization
//!
//! TUI mode writes to a file under the data directory when enabled, since
//! the terminal itself is taken over by the interface. CLI mode logs to
//! stderr.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AgriPaths, Settings};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Keeps the background log writer alive; dropping it flushes buffered
    /// output.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging based on mode and configuration
pub fn init_logging(paths: &AgriPaths, settings: &Settings, is_tui_mode: bool) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_level.clone()),
    );

    if is_tui_mode && settings.log_to_file {
        let logs_dir = paths.logs_dir();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = "agrisense.log";
        let log_file_path = logs_dir.join(log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else if is_tui_mode {
        // File logging disabled: swallow output rather than corrupt the
        // alternate screen.
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::sink),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
