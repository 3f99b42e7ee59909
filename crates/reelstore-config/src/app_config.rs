//! Application configuration structures.

use reelstore_core::telemetry::{LogFormat, TelemetryConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// MongoDB configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "reelstore".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// MongoDB connection configuration.
///
/// Pool sizes and timeouts are handed to the driver as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string (`mongodb://` or `mongodb+srv://`).
    pub uri: String,
    /// Database holding the `users` and `sessions` collections.
    pub database: String,
    /// Application name reported to the server.
    pub app_name: String,
    /// Minimum driver pool size.
    pub min_pool_size: u32,
    /// Maximum driver pool size.
    pub max_pool_size: u32,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Server selection timeout in seconds.
    pub server_selection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "reelstore".to_string(),
            app_name: "reelstore".to_string(),
            min_pool_size: 0,
            max_pool_size: 10,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the server selection timeout as a Duration.
    #[must_use]
    pub const fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ObservabilityConfig {
    /// Builds the tracing configuration for this log level and format.
    #[must_use]
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            filter: format!("{level},reelstore={level}", level = self.log_level.to_lowercase()),
            format: self.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "reelstore");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.server_selection_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_telemetry_from_observability() {
        let config = ObservabilityConfig {
            log_level: "DEBUG".to_string(),
            log_format: LogFormat::Json,
        };
        let telemetry = config.telemetry();
        assert_eq!(telemetry.filter, "debug,reelstore=debug");
        assert_eq!(telemetry.format, LogFormat::Json);
    }
}
