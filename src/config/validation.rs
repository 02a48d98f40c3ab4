//! Configuration validation module
//!
//! This module provides validation functions for the store configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{Result, StoreError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(StoreError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(StoreError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(StoreError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(StoreError::Config(format!(
            "Invalid log level: {}",
            config.level
        )));
    }

    Ok(())
}
