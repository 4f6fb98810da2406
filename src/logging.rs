//! Logging setup for the hydra-app binary.
//!
//! Library code emits `tracing` events; the binary installs a fmt
//! subscriber that writes them to stderr, keeping stdout for the
//! rendered configuration.

use std::io;

/// Filter used when running normally.
pub const DEFAULT_FILTER: &str = "hydra_app=warn";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "hydra_app=debug";

/// Returns the filter directive for the requested verbosity.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Installs the global subscriber.
///
/// The filter is fixed in code; `RUST_LOG` is not consulted.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_directive(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
