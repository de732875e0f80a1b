use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Workflow label for a job application. No transition graph: any state can
/// move to any other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "job_status")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

/// Job record in the database. `user_id` is set once at insert and never
/// updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Job {
    /// All jobs belonging to one owner, newest first.
    pub async fn list_by_owner(db: &PgPool, owner: Uuid) -> anyhow::Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, user_id, company, position, status, created_at, updated_at
            FROM jobs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, user_id, company, position, status, created_at, updated_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(job)
    }

    pub async fn create(
        db: &PgPool,
        owner: Uuid,
        company: &str,
        position: &str,
        status: JobStatus,
    ) -> anyhow::Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (user_id, company, position, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, company, position, status, created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(company)
        .bind(position)
        .bind(status)
        .fetch_one(db)
        .await?;
        Ok(job)
    }

    /// Partial update; absent fields keep their current value. Owner and id
    /// are not touchable here. `None` means the row is gone, which can
    /// happen between the caller's ownership check and this write.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        company: Option<&str>,
        position: Option<&str>,
        status: Option<JobStatus>,
    ) -> anyhow::Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET company    = COALESCE($2, company),
                position   = COALESCE($3, position),
                status     = COALESCE($4, status),
                updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, company, position, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(company)
        .bind(position)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(job)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Uuid>> {
        let deleted = sqlx::query_scalar::<_, Uuid>(
            r#"
            DELETE FROM jobs
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(deleted)
    }
}
