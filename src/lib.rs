//! ttable-store
//!
//! Data-access layer for the college timetable backend. This library
//! provides typed repositories over PostgreSQL for groups and teachers,
//! request schemas for the administration and search endpoints, and the
//! data shapes consumed by the documentation generator.
//!
//! The HTTP layer owns the connection pool and injects it into each
//! repository at construction; this crate never opens or closes it on
//! its own.

pub mod config;
pub mod database;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, StoreError};

// Re-export main components for easy access
pub use database::{DatabasePool, GroupRepository, TeacherRepository};
pub use models::{CreateOutcome, SearchRequest, SearchTab};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
