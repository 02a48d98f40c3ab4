//! Test helpers module
//!
//! This module provides utilities for testing the store layer against a
//! real PostgreSQL instance.

pub mod database_helper;

pub use database_helper::*;
