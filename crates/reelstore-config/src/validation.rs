//! Configuration validation.
//!
//! Collects every problem in one pass so a misconfigured deployment fails
//! at startup with the full list instead of one error per restart.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URI format is invalid.
    InvalidUri { message: String },
    /// Database name is empty.
    MissingDatabaseName,
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidUri { message } => write!(f, "Invalid database URI: {}", message),
            Self::MissingDatabaseName => write!(f, "Database name cannot be empty"),
            Self::NonPositiveTimeout { name } => write!(f, "Timeout '{}' must be positive", name),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum driver pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Accepted connection string schemes.
    const URI_SCHEMES: &'static [&'static str] = &["mongodb", "mongodb+srv"];
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_database(&config.database, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        // Multi-host seed lists are not valid URLs, so only the scheme is checked.
        match config.uri.split_once("://") {
            Some((scheme, hosts)) if Self::URI_SCHEMES.contains(&scheme) => {
                if hosts.trim().is_empty() {
                    errors.push(ConfigValidationError::InvalidUri {
                        message: "no host given".to_string(),
                    });
                }
            }
            Some((scheme, _)) => errors.push(ConfigValidationError::InvalidUri {
                message: format!("unsupported scheme '{}'", scheme),
            }),
            None => errors.push(ConfigValidationError::InvalidUri {
                message: "URI must start with mongodb:// or mongodb+srv://".to_string(),
            }),
        }

        if config.database.trim().is_empty() {
            errors.push(ConfigValidationError::MissingDatabaseName);
        }

        if config.min_pool_size > config.max_pool_size {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_pool_size,
                max: config.max_pool_size,
            });
        }
        if config.max_pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
        if config.server_selection_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.server_selection_timeout_secs".to_string(),
            });
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
