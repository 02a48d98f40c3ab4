//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod group;
pub mod teacher;

// Re-export repositories
pub use group::GroupRepository;
pub use teacher::TeacherRepository;
