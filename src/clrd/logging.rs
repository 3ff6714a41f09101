//! Logging init: structured diagnostics to stderr.
//!
//! User-facing results are printed by the CLI; tracing output is for
//! diagnosing which filesystem step did what. `RUST_LOG` overrides the
//! default filter.

use tracing_subscriber::EnvFilter;

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,clrd=debug"
    } else {
        "warn"
    }
}

/// Initialize logging to stderr. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
