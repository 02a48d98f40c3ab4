//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the store layer.

use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "ttable-store.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, rows: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            rows = rows,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            "Database operation failed"
        );
    }
}
