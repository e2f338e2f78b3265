//! Logging initialization for the client.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// The level comes from `RUST_LOG` when set, otherwise from the provided
/// default. `DRITTER_LOG_JSON=1` switches to JSON output for machine
/// consumption.
///
/// # Example
///
/// ```ignore
/// init_logging("info");
/// tracing::info!("Client started");
/// ```
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let json = std::env::var("DRITTER_LOG_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if json {
        let _ = fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
