//! Tracing setup for the harness binary.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "LINKSORT_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Filter from `LINKSORT_LOG`, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. Fails if one is already set.
///
/// Events go to stderr so reports on stdout stay clean.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

/// Install the global subscriber, keeping an existing one if present.
pub fn init_tracing() {
    if let Err(err) = try_init_tracing() {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
