//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; user-facing output goes
//! through [`crate::ui::RenderSink`] and is never filtered.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "warn,devgrid=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `--debug`.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(debug)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
