//! Diagnostic logging using the `tracing` ecosystem.
//!
//! User-facing output goes through [crate::ui]; this is for `-v` traces of
//! what the resolver, stores and git backend are doing. Output goes to
//! stderr so it never mixes with the printed version.

use tracing_subscriber::{fmt, EnvFilter};

/// Map a `-v` count to an `EnvFilter` directive.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
