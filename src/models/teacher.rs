//! Teacher model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A teacher record, keyed by full name.
///
/// Building association comes in a future version; it will also feed
/// version control (checking for a spare slot between a teacher's classes
/// held in different buildings).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub fio: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacherRequest {
    pub fio: String,
}
