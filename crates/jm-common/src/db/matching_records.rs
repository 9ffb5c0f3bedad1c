use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use serde::{Deserialize, Serialize};
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum MatchingRecordStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Scores written for one (candidate, job posting) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchingRecordInsert {
    pub candidate_id: i64,
    pub job_posting_id: i64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub qualification_score: f64,
    pub total_score: f64,
    pub engine_version: Option<String>,
}

/// Persisted scoring outcome keyed by (candidate, job posting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingRecord {
    pub candidate_id: i64,
    pub job_posting_id: i64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub qualification_score: f64,
    pub total_score: f64,
    pub engine_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const RECORD_COLUMNS: &str = "candidate_id, job_posting_id, skill_score, experience_score, \
     qualification_score, total_score, engine_version, created_at, updated_at";

fn record_from_row(row: &Row) -> MatchingRecord {
    MatchingRecord {
        candidate_id: row.get("candidate_id"),
        job_posting_id: row.get("job_posting_id"),
        skill_score: row.get("skill_score"),
        experience_score: row.get("experience_score"),
        qualification_score: row.get("qualification_score"),
        total_score: row.get("total_score"),
        engine_version: row.get("engine_version"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create or replace the record for the pair. Last write wins; one atomic
/// statement, no cross-record ordering guarantee.
#[instrument(skip(pool, record))]
pub async fn upsert_matching_record(
    pool: &PgPool,
    record: &MatchingRecordInsert,
) -> Result<MatchingRecord, MatchingRecordStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "INSERT INTO jobboard.matching_records (
                candidate_id,
                job_posting_id,
                skill_score,
                experience_score,
                qualification_score,
                total_score,
                engine_version
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7
            )
            ON CONFLICT (candidate_id, job_posting_id) DO UPDATE SET
                skill_score = EXCLUDED.skill_score,
                experience_score = EXCLUDED.experience_score,
                qualification_score = EXCLUDED.qualification_score,
                total_score = EXCLUDED.total_score,
                engine_version = EXCLUDED.engine_version,
                updated_at = NOW()
            RETURNING {RECORD_COLUMNS};"
        ))
        .await?;

    let row = client
        .query_one(
            &stmt,
            &[
                &record.candidate_id,
                &record.job_posting_id,
                &record.skill_score,
                &record.experience_score,
                &record.qualification_score,
                &record.total_score,
                &record.engine_version,
            ],
        )
        .await?;

    Ok(record_from_row(&row))
}

/// One pair's record, if it has been scored.
#[instrument(skip(pool))]
pub async fn fetch_matching_record(
    pool: &PgPool,
    candidate_id: i64,
    job_posting_id: i64,
) -> Result<Option<MatchingRecord>, MatchingRecordStorageError> {
    let client = pool.get().await?;

    let row = client
        .query_opt(
            &format!(
                "SELECT {RECORD_COLUMNS}
                 FROM jobboard.matching_records
                 WHERE candidate_id = $1 AND job_posting_id = $2"
            ),
            &[&candidate_id, &job_posting_id],
        )
        .await?;

    Ok(row.as_ref().map(record_from_row))
}

/// All records for a posting, best total first. Ranking consumers read this
/// ordering directly.
#[instrument(skip(pool))]
pub async fn fetch_records_for_job(
    pool: &PgPool,
    job_posting_id: i64,
) -> Result<Vec<MatchingRecord>, MatchingRecordStorageError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            &format!(
                "SELECT {RECORD_COLUMNS}
                 FROM jobboard.matching_records
                 WHERE job_posting_id = $1
                 ORDER BY total_score DESC, candidate_id"
            ),
            &[&job_posting_id],
        )
        .await?;

    Ok(rows.iter().map(record_from_row).collect())
}
