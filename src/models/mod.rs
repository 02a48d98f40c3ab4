//! Data models module
//!
//! This module contains all data structures used throughout the store layer

pub mod docs;
pub mod group;
pub mod outcome;
pub mod search;
pub mod teacher;

// Re-export commonly used models
pub use group::{ActivityFilter, CreateGroupRequest, Group, StatusUpdateRequest};
pub use outcome::CreateOutcome;
pub use search::{SearchRequest, SearchTab};
pub use teacher::{CreateTeacherRequest, Teacher};
