//! Log output for binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary, which calls [`init`] once at startup.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a `-v` count.
///
/// Zero shows warnings and errors, each extra `-v` lowers the threshold by
/// one level down to `trace`.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity-derived default. Calling
/// this again after a subscriber is installed has no effect.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
