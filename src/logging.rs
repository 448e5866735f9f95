//! Tracing subscriber setup driven by the `LOG_*` settings.
//!
//! - Filter: `RUST_LOG` when set, otherwise `LOG_LEVEL`; `--verbose` forces debug
//! - Stdout: layout chosen by `LOG_FORMAT`
//! - File: same layout without ANSI colours when `LOG_TO_FILE` is on

use std::fs::{self, OpenOptions};
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Initialize tracing from the logging settings.
///
/// The returned guard flushes the file writer when dropped, so it must live
/// as long as the process logs.
pub fn init(config: &LoggingConfig, verbose: bool) -> io::Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(config.format, io::stdout, true)];

    let guard = if config.to_file {
        if let Some(parent) = config.file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        layers.push(fmt_layer(config.format, writer, false));
        Some(guard)
    } else {
        None
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(layers)
        .with(env_filter(config, verbose))
        .try_init();

    if let Some(ignored) = &config.unrecognized_format {
        tracing::warn!(
            log_format = %ignored,
            "LOG_FORMAT not recognised, using the full layout (expected full, compact, pretty or json)"
        );
    }
    if config.to_file {
        tracing::debug!(file = %config.file.display(), "File logging enabled");
    }

    Ok(guard)
}

/// Minimal stderr logging for failures that happen before settings exist.
pub fn init_fallback() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

fn env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_directive()))
}

fn fmt_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    match format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}
