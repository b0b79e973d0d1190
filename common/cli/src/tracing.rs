use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Logs to stdout at the level selected by `-v`/`-q` (overridable with `RUST_LOG`), and, when a trace file is
/// given, everything down to `TRACE` to that file.
pub fn configure_tracing(trace: Option<PathBuf>, verbosity: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let stdout_filter = EnvFilter::builder()
        .with_default_directive(
            verbosity
                .log_level_filter()
                .as_trace()
                .into(),
        )
        .from_env_lossy();

    let stdout_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_filter(stdout_filter);

    let trace_layer = match trace {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("Creating trace log. file: {}", path.display()))?;

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::TRACE),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(trace_layer)
        .try_init()?;

    Ok(())
}
