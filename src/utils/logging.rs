//! Logging setup.

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger, honouring `RUST_LOG`.
pub fn init_from_env() {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);
    // A logger may already be installed (tests, embedding).
    if let Err(e) = Builder::from_env(env).format_timestamp_secs().try_init() {
        log::debug!("Logger already initialised: {e}");
    }
}
