use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::server::LogFormat;

const DEFAULT_FILTER: &str = "info,actix_web=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(base.with_ansi(false).json()).init(),
        LogFormat::Pretty => registry.with(base.pretty()).init(),
    }
}
