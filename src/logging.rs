use crate::*;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Install the global stderr subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Only the first call installs
/// anything; later calls return the same outcome as that first one.
pub fn init_logging(default_filter: &str) -> Result {
    LOGGING_INIT
        .get_or_init(|| {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_filter))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| format!("failed to initialize logging: {e}"))
        })
        .clone()
        .map_err(Error::Internal)
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
