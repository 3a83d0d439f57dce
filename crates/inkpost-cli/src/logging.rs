//! Logging setup for the binary.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up alongside `tracing` events.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then config.
pub fn filter_directive(configured: &str, verbose: bool) -> String {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) if !env.is_empty() => env,
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Later calls are ignored.
pub fn init(configured: &str, verbose: bool) {
    let directive = filter_directive(configured, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
