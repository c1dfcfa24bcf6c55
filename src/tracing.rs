//! Logging setup for hosts and tools embedding the tagger
//!
//! Library code only emits `tracing` events; call [`init`] once from a
//! binary or test harness to see them.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - rescan decisions, ignored triggers, stale queries
//! - `RUST_LOG=rainbow_braces::tagger=trace` - per-rescan tag counts
//! - `RUST_LOG=rainbow_braces::config=info` - config load results
//!
//! # Log Files
//!
//! Logs are written to `~/.config/rainbow-braces/logs/rainbow.log` with daily
//! rotation, at debug level.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};

/// Install a subscriber with console and file logging.
///
/// Console output respects RUST_LOG (default `warn`). Returns the directory
/// receiving `rainbow.log` when this call installed the subscriber with file
/// logging. Returns `None` when the logs directory cannot be created (only
/// the console layer is installed) or when a subscriber is already in place,
/// including one from an earlier `init`.
pub fn init() -> Option<PathBuf> {
    let logs_dir = ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: Could not initialize file logging: {}", e))
        .ok();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    let file_layer = logs_dir.as_ref().map(|dir| {
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug"))
    });

    match tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        Ok(()) => logs_dir,
        Err(_) => {
            tracing::debug!("tracing subscriber already installed");
            None
        }
    }
}
