//! Insert outcome type

use serde::{Deserialize, Serialize};

/// Result of a conflict-tolerant insert.
///
/// An insert that hits the unique key of an existing row is not an error;
/// it simply reports that the row was already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreateOutcome {
    Created(i64),
    AlreadyExists,
}

impl CreateOutcome {
    /// Id of the newly created row, if one was inserted
    pub fn created_id(self) -> Option<i64> {
        match self {
            CreateOutcome::Created(id) => Some(id),
            CreateOutcome::AlreadyExists => None,
        }
    }
}

impl From<Option<i64>> for CreateOutcome {
    fn from(id: Option<i64>) -> Self {
        match id {
            Some(id) => CreateOutcome::Created(id),
            None => CreateOutcome::AlreadyExists,
        }
    }
}
