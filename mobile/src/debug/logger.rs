//! Logging initialization

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::DebugConfig;

/// Initialize the logging system.
///
/// Writes human-readable output to stderr, filtered by `RUST_LOG` (falling
/// back to the configured default). With file logging enabled, also writes
/// a daily-rotated plain-text log under the configured directory.
///
/// Call once at startup; a second call is a no-op (the first subscriber
/// stays installed).
pub fn init(config: &DebugConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("mobile=info,warn"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if config.file_logging {
        if let Err(e) = fs::create_dir_all(&config.log_dir) {
            eprintln!("Warning: Failed to create log directory: {}", e);
            let _ = registry.try_init();
            return;
        }

        let file_appender = tracing_appender::rolling::daily(&config.log_dir, "mobile.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_ansi(false); // No ANSI codes in log files

        let _ = registry.with(file_layer).try_init();

        // Keep the guard alive for the lifetime of the program
        std::mem::forget(guard);
    } else {
        let _ = registry.try_init();
    }

    tracing::debug!(
        log_level = %config.log_level,
        file_logging = config.file_logging,
        "Logging initialized"
    );
}
