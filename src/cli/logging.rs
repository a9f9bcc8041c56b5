//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output when `verbose` is enabled. Logs go to stderr so stdout carries the
/// prompt alone.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
