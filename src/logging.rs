//! Diagnostic tracing for traversals.
//!
//! Diagnostics go to stderr so they never mix with the outcome printed on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads the `RUST_LOG` env var, defaulting to `warn` if unset; `--dump-grid`
/// output is logged at `info`, so it raises the default to `info`.
///
/// ```bash
/// RUST_LOG=mazerunner=trace mazerunner grid.txt
/// ```
pub fn init(dump_grid: bool) {
    let fallback = if dump_grid { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
