use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    prelude::*,
    EnvFilter,
};

/// Initialize logging with file output and console output.
///
/// Fails if a global subscriber is already installed, which is common when
/// the host container configured logging before the application started.
pub fn init_logging(log_dir: impl AsRef<Path>, log_prefix: &str) -> anyhow::Result<()> {
    let log_dir_path = log_dir.as_ref();

    // The host container may hand us a fresh deployment directory
    std::fs::create_dir_all(log_dir_path)?;

    // Rolling file appender, one file per day per deployment prefix
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_prefix)
        .build(log_dir_path)?;

    // Non-blocking so bookkeeping calls never wait on disk
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; otherwise debug for hostbridge crates, warn for everything else
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hostbridge=debug,warn"));

    // Console output goes to stderr, next to the host container's own log
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr);

    // File output
    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(false) // No color codes in files
        .with_writer(file_writer);

    // Combine layers. Fails rather than replacing a subscriber the host installed
    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    // The writer must outlive every span; keep the guard for the process lifetime.
    std::mem::forget(guard);

    tracing::info!("Logging initialized with file output to {:?}", log_dir_path);
    Ok(())
}

/// Initialize simple console-only logging for tests
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hostbridge=trace,debug")),
        )
        .with_test_writer()
        .try_init();
}
