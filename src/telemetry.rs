//! Telemetry logic.
//! Support logging and metrics.
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Counter of handled signup requests, labelled by `status`.
pub const SIGNUP_RESPONSES: &str = "signup_responses_total";

/// Install the global tracing subscriber and describe signup metrics.
///
/// `RUST_LOG` wins over `default_filter`. Fails if a subscriber is already
/// installed.
pub fn setup_logging(default_filter: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    metrics::describe_counter!(
        SIGNUP_RESPONSES,
        metrics::Unit::Count,
        "Signup requests handled, by response status."
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
}
