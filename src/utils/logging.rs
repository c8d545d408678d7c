//! Tracing setup for the binary.
//!
//! Logs go to stderr: stdout carries the replies (and the webhook JSON).

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins when set; otherwise
/// `verbose` selects `debug` and the default is `warn`.
/// Returns false if a subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    let default_level = if verbose { "eventquery=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
