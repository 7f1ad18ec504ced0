use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "ECHOFORM_LOG";

/// Initialize tracing to stderr.
///
/// Stdout carries the demo output, so logs never go there. The filter comes
/// from `ECHOFORM_LOG`, then `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
