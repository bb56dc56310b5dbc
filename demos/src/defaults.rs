use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the fmt subscriber, honouring `RUST_LOG` when it is set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
