//! Tracing setup. Diagnostics go to stderr so document text on stdout
//! stays pipeable; an optional append-mode log file captures more.

use prdraft_core::config::types::{LoggingConfig, ResolvedConfig};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment override for the stderr filter, e.g. `PRDRAFT_LOG=debug`.
const ENV_FILTER_VAR: &str = "PRDRAFT_LOG";

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter(&cfg.logging));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    match file_writer(&cfg.logging) {
        Some((writer, level)) => {
            let filter =
                EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}

fn stderr_filter(logging: &LoggingConfig) -> EnvFilter {
    let level = parse_level(&logging.level).unwrap_or(LevelFilter::INFO);
    EnvFilter::builder()
        .with_env_var(ENV_FILTER_VAR)
        .with_default_directive(level.into())
        .from_env_lossy()
}

fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, LevelFilter)> {
    let path = logging.file.as_ref()?;

    let level_str = logging.file_level.as_deref().unwrap_or(&logging.level);
    let level = parse_level(level_str).unwrap_or(LevelFilter::DEBUG);

    let file = OpenOptions::new().create(true).append(true).open(path).unwrap_or_else(|e| {
        eprintln!("failed to open log file {}: {e}", path.display());
        std::process::exit(1);
    });

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // The guard must outlive main for buffered lines to flush.
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    Some((non_blocking, level))
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
