use std::env;
use std::sync::Once;
use tracing::{Level, debug};

static INIT: Once = Once::new();

/// Installs a global `tracing` fmt subscriber.
///
/// The maximum level is taken from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`), defaulting to `INFO`.
/// Calling it more than once is harmless; only the first call installs anything.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "TRACE" => Level::TRACE,
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::INFO,
        };

        // Another subscriber may already be installed by the host application.
        if tracing_subscriber::fmt()
            .with_max_level(level)
            .try_init()
            .is_ok()
        {
            debug!("Log level set to: {}", level);
        }
    });
}
