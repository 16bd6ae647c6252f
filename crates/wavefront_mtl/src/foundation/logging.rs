//! Logging utilities
//!
//! The scanner itself only talks to the `log` facade. Binaries call one of
//! the initializers below once at start-up.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with `default_filter` unless `RUST_LOG` overrides it
pub fn init_with_level(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
