// Tracing for the facility's own internals, kept apart from tool output
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Installs a `tracing` subscriber driven only by `RUST_LOG`.
///
/// Defaults to `off`. The `--verbose` flag controls [`crate::debug_log!`]
/// output, not this subscriber, so internal events never leak into the
/// streams a tool's consumers parse.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    // A second call (or a test harness subscriber) is not an error.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
