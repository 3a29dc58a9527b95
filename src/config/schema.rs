//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the network monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Persisted-log storage settings.
    pub storage: StorageConfig,

    /// Interception behavior.
    pub intercept: InterceptConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Storage settings for the persisted connection log.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Application-writable directory holding the log file.
    pub directory: String,

    /// Log file name.
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_name: "network_logs.json".to_string(),
        }
    }
}

impl StorageConfig {
    /// Full path of the persisted log file.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.file_name)
    }
}

/// Interception behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InterceptConfig {
    /// URL schemes the interceptor claims.
    pub schemes: Vec<String>,

    /// Maximum redirect hops before an exchange fails.
    pub max_redirects: usize,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            schemes: vec!["http".to_string(), "https".to_string()],
            max_redirects: 10,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "netwatch=info".to_string(),
        }
    }
}
