//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The level comes from the `CPM_LOG` environment variable (e.g. "info",
//! "debug") and defaults to `info`.

use tracing_subscriber::fmt;

/// Initialise the global logging subscriber.
///
/// Call once at startup; a second call panics in `tracing-subscriber`.
pub fn init_logging() {
    let level = std::env::var("CPM_LOG")
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::INFO);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
