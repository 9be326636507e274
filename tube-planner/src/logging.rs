//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with directions on stdout. The
//! filter comes from `RUST_LOG`, defaulting to warnings only.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the log filter from a `RUST_LOG`-style directive string.
///
/// Invalid directives fall back to the default level with a warning.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    let directives = directives.unwrap_or("").trim();
    if directives.is_empty() {
        return EnvFilter::new(DEFAULT_LEVEL.to_string());
    }
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            DEFAULT_LEVEL,
            err,
        );
        EnvFilter::new(DEFAULT_LEVEL.to_string())
    })
}

/// Install the global subscriber. Does nothing if one is already set.
pub fn init_logger() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(rust_log.as_deref()))
        .try_init();
}
