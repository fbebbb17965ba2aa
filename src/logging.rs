use crate::persistence::LOG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TOMATO_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log to `<data_dir>/tomato.log`; the terminal belongs to the TUI.
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init(data_dir: &Path) -> Result<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to init subscriber")?;

    Ok(guard)
}
