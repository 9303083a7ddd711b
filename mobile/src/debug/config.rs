//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log level filter (e.g., "mobile=debug,info")
    pub log_level: String,
    /// Also write logs to a daily-rotated file under `log_dir`
    pub file_logging: bool,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "mobile=info,warn".to_string(),
            file_logging: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "mobile=info,warn".to_string()),
            file_logging: std::env::var("CUIDAR_FILE_LOG")
                .map(|v| v == "1")
                .unwrap_or(false),
            log_dir: std::env::var("CUIDAR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
        }
    }
}
