use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging on stderr so stdout only carries the report.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_DIRECTIVE));

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // try_init: tests and embedding programs may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
