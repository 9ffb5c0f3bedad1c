use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;
use tracing::{info, instrument};

use crate::db::{DbPoolError, PgPool};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migration: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to build pool: {0}")]
    PoolBuild(#[from] DbPoolError),
}

struct Migration {
    id: i32,
    description: &'static str,
    sql: &'static str,
}

// Only the matching-record store belongs to this engine. Candidate profiles,
// education/experience rows, documents and applications are owned by the
// job-board application and are never created or altered here.
const MIGRATIONS: &[Migration] = &[Migration {
    id: 1,
    description: "matching_records table + score range checks",
    sql: r#"
CREATE SCHEMA IF NOT EXISTS jobboard;

CREATE TABLE IF NOT EXISTS jobboard.matching_records (
    candidate_id BIGINT NOT NULL,
    job_posting_id BIGINT NOT NULL,
    skill_score DOUBLE PRECISION NOT NULL,
    experience_score DOUBLE PRECISION NOT NULL,
    qualification_score DOUBLE PRECISION NOT NULL,
    total_score DOUBLE PRECISION NOT NULL,
    engine_version TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (candidate_id, job_posting_id)
);

CREATE INDEX IF NOT EXISTS idx_matching_records_job_score
    ON jobboard.matching_records(job_posting_id, total_score DESC);

DO $$
BEGIN
    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'chk_skill_score_range'
    ) THEN
        ALTER TABLE jobboard.matching_records
            ADD CONSTRAINT chk_skill_score_range
            CHECK (skill_score >= 0.0 AND skill_score <= 10.0);
    END IF;

    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'chk_experience_score_range'
    ) THEN
        ALTER TABLE jobboard.matching_records
            ADD CONSTRAINT chk_experience_score_range
            CHECK (experience_score >= 0.0);
    END IF;

    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'chk_qualification_score_values'
    ) THEN
        ALTER TABLE jobboard.matching_records
            ADD CONSTRAINT chk_qualification_score_values
            CHECK (qualification_score = ANY (ARRAY[0.0, 2.0, 3.0, 4.0, 6.0, 8.0, 10.0]::double precision[]));
    END IF;

    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'chk_total_score_range'
    ) THEN
        ALTER TABLE jobboard.matching_records
            ADD CONSTRAINT chk_total_score_range
            CHECK (total_score >= 0.0 AND total_score <= 10.0);
    END IF;
END $$;
"#,
}];

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let mut client = pool.get().await?;
    client
        .batch_execute(
            "CREATE SCHEMA IF NOT EXISTS jobboard;
             CREATE TABLE IF NOT EXISTS jobboard.schema_migrations (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
             );",
        )
        .await?;

    for migration in MIGRATIONS {
        let already_applied: bool = client
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM jobboard.schema_migrations WHERE id = $1)",
                &[&migration.id],
            )
            .await?
            .get(0);

        if already_applied {
            continue;
        }

        let tx = client.transaction().await?;
        tx.batch_execute(migration.sql).await?;
        tx.execute(
            "INSERT INTO jobboard.schema_migrations (id, description) VALUES ($1, $2)",
            &[&migration.id, &migration.description],
        )
        .await?;
        tx.commit().await?;

        info!(
            id = migration.id,
            description = migration.description,
            "applied migration"
        );
    }

    Ok(())
}
