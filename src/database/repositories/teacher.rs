//! Teacher repository implementation

use sqlx::PgPool;

use crate::models::group::ActivityFilter;
use crate::models::outcome::CreateOutcome;
use crate::models::teacher::{CreateTeacherRequest, Teacher};
use crate::utils::errors::StoreError;
use crate::utils::logging::log_database_operation;

#[derive(Clone)]
pub struct TeacherRepository {
    pool: PgPool,
}

impl TeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List teachers with pagination and an optional activity filter.
    ///
    /// No building filter yet; teachers are listed campus-wide. Row order is
    /// the database default.
    pub async fn list(
        &self,
        filter: &ActivityFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Teacher>, StoreError> {
        let teachers = match filter.is_active {
            Some(is_active) => {
                sqlx::query_as::<_, Teacher>(
                    "SELECT id, fio, is_active FROM teachers WHERE is_active = $1 LIMIT $2 OFFSET $3"
                )
                .bind(is_active)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Teacher>(
                    "SELECT id, fio, is_active FROM teachers LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(teachers)
    }

    /// Create a new teacher, ignoring the insert when the name is taken
    pub async fn create(
        &self,
        request: &CreateTeacherRequest,
    ) -> Result<CreateOutcome, StoreError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            INSERT INTO teachers (fio) VALUES ($1)
            ON CONFLICT (fio) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&request.fio)
        .fetch_optional(&self.pool)
        .await?;

        Ok(CreateOutcome::from(row.map(|(id,)| id)))
    }

    /// Bulk-switch the active flag for the given id lists.
    ///
    /// Same contract as the group repository: matched-row counts, silent
    /// skip of missing ids, no statement for an empty list.
    pub async fn switch_status(
        &self,
        activate: &[i64],
        deprecate: &[i64],
    ) -> Result<(u64, u64), StoreError> {
        let mut activated = 0;
        let mut deprecated = 0;

        if !activate.is_empty() {
            activated = sqlx::query("UPDATE teachers SET is_active = true WHERE id = ANY($1)")
                .bind(activate)
                .execute(&self.pool)
                .await?
                .rows_affected();
        }
        if !deprecate.is_empty() {
            deprecated = sqlx::query("UPDATE teachers SET is_active = false WHERE id = ANY($1)")
                .bind(deprecate)
                .execute(&self.pool)
                .await?
                .rows_affected();
        }

        log_database_operation("switch_status", "teachers", activated + deprecated, true);
        Ok((activated, deprecated))
    }

    /// Dump all teachers for (re)building the search index
    pub async fn list_for_index(&self) -> Result<Vec<Teacher>, StoreError> {
        let teachers = sqlx::query_as::<_, Teacher>("SELECT id, fio, is_active FROM teachers")
            .fetch_all(&self.pool)
            .await?;

        Ok(teachers)
    }
}
