//! Logging setup
//!
//! - Human-readable output on stdout (colored in debug builds)
//! - Optional one-line JSON file output with daily rotation
//! - `log` records from dependencies are forwarded into `tracing`
//!
//! Filtering follows `RUST_LOG`; without it the service's own crates log at
//! DEBUG in debug builds and INFO in release builds.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "svcmsg.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Initialize the global subscriber
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let _ = LOG_DIR.set(dir.to_path_buf());

            let (non_blocking, guard) =
                tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_NAME));
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_thread_ids(true)
                    .with_target(true)
                    .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
                    .with_filter(default_filter()),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(cfg!(debug_assertions))
        .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_filter(default_filter());

    let subscriber = Registry::default().with(file_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "svcmsg::logging",
        log_dir = ?log_dir.map(|d| d.display().to_string()),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

fn default_filter() -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        "info,svcmsg=debug,svcmsg_app=debug,svcmsg_infrastructure=debug,tower_http=debug"
    } else {
        "info"
    };

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Directory of the JSON log file, when file logging is enabled
pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}
