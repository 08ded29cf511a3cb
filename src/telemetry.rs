use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info,tower_http=debug";

// Console logging to stderr so `audit --format json` keeps stdout clean
pub fn init_tracing_subscriber() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
