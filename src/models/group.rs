//! Group model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A study group, scoped to the building it belongs to.
///
/// `name` is globally unique regardless of building.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub building_id: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub building_id: i64,
}

/// Id lists for the bulk activate/deactivate operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub set_as_active: Option<Vec<i64>>,
    pub set_as_deprecated: Option<Vec<i64>>,
}

impl StatusUpdateRequest {
    /// Ids to activate; an omitted list reads as empty
    pub fn activate_ids(&self) -> &[i64] {
        self.set_as_active.as_deref().unwrap_or(&[])
    }

    /// Ids to deprecate; an omitted list reads as empty
    pub fn deprecate_ids(&self) -> &[i64] {
        self.set_as_deprecated.as_deref().unwrap_or(&[])
    }
}

/// Optional activity filter for paginated listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityFilter {
    pub is_active: Option<bool>,
}
