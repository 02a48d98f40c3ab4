//! Error handling for ttable-store
//!
//! This module defines the main error types used throughout the store layer
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for ttable-store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for ttable-store operations
pub type Result<T> = std::result::Result<T, StoreError>;
