//! Tracing setup: one fmt layer teed to stdout and a log file, filtered by RUST_LOG.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when RUST_LOG is unset. HTTP client internals are noisy at info.
const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Installs the global tracing subscriber, writing every event to stdout and `log_file`.
///
/// Load `.env` before calling, otherwise a RUST_LOG set there is not seen.
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let log_file = log_file.as_ref();
    let file = Arc::new(open_log_file(log_file)?);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(file))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::info!(log_file = %log_file.display(), "Tracing initialized");
    Ok(())
}

/// Opens `path` for appending, creating it and its parent directory if missing.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
