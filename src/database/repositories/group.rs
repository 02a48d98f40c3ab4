//! Group repository implementation

use sqlx::PgPool;

use crate::models::group::{ActivityFilter, CreateGroupRequest, Group};
use crate::models::outcome::CreateOutcome;
use crate::utils::errors::StoreError;
use crate::utils::logging::log_database_operation;

#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List groups of a building with pagination and an optional activity filter.
    ///
    /// Row order is the database default and is not guaranteed to be stable
    /// under concurrent inserts. Limit and offset are passed through to the
    /// database unchecked.
    pub async fn list(
        &self,
        building_id: i64,
        filter: &ActivityFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Group>, StoreError> {
        let groups = match filter.is_active {
            Some(is_active) => {
                sqlx::query_as::<_, Group>(
                    "SELECT id, name, building_id, is_active FROM groups WHERE building_id = $1 AND is_active = $2 LIMIT $3 OFFSET $4"
                )
                .bind(building_id)
                .bind(is_active)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Group>(
                    "SELECT id, name, building_id, is_active FROM groups WHERE building_id = $1 LIMIT $2 OFFSET $3"
                )
                .bind(building_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(groups)
    }

    /// Create a new group, ignoring the insert when the name is taken.
    ///
    /// `AlreadyExists` means a row with this name was already present; it is
    /// not an error.
    pub async fn create(&self, request: &CreateGroupRequest) -> Result<CreateOutcome, StoreError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            INSERT INTO groups (name, building_id) VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&request.name)
        .bind(request.building_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(CreateOutcome::from(row.map(|(id,)| id)))
    }

    /// Bulk-switch the active flag for the given id lists.
    ///
    /// Returns how many rows each direction actually matched; ids without a
    /// row are silently skipped. An empty list issues no statement at all.
    /// The two updates are separate statements with no shared transaction.
    pub async fn switch_status(
        &self,
        activate: &[i64],
        deprecate: &[i64],
    ) -> Result<(u64, u64), StoreError> {
        let mut activated = 0;
        let mut deprecated = 0;

        if !activate.is_empty() {
            activated = sqlx::query("UPDATE groups SET is_active = true WHERE id = ANY($1)")
                .bind(activate)
                .execute(&self.pool)
                .await?
                .rows_affected();
        }
        if !deprecate.is_empty() {
            deprecated = sqlx::query("UPDATE groups SET is_active = false WHERE id = ANY($1)")
                .bind(deprecate)
                .execute(&self.pool)
                .await?
                .rows_affected();
        }

        log_database_operation("switch_status", "groups", activated + deprecated, true);
        Ok((activated, deprecated))
    }

    /// Dump all groups for (re)building the search index
    pub async fn list_for_index(&self) -> Result<Vec<Group>, StoreError> {
        let groups =
            sqlx::query_as::<_, Group>("SELECT id, name, building_id, is_active FROM groups")
                .fetch_all(&self.pool)
                .await?;

        Ok(groups)
    }
}
