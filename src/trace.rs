use crate::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber
///
/// Spans and events go to stderr; `RUST_LOG` narrows the filter.
pub fn init_tracing() -> Result<()> {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_ansi(console::Term::stderr().features().colors_supported())
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| eyre::eyre!("failed to initialize tracing: {err}"))
}
