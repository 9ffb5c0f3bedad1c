use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;
use crate::scoring::DegreeLevel;
use crate::{CandidateProfile, EducationEntry, ExperienceEntry, ProfileSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum ProfileFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

fn experience_from_row(row: &Row) -> ExperienceEntry {
    ExperienceEntry {
        title: row.get("title"),
        company: row.get("company"),
        location: row.get("location"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
    }
}

fn education_from_row(row: &Row) -> EducationEntry {
    EducationEntry {
        institution: row.get("institution"),
        degree: row.get("degree"),
        degree_level: parse_degree_level(row.get("degree_level")),
        field_of_study: row.get("field_of_study"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
    }
}

// Legacy rows predate the taxonomy column; NULL and unknown labels both
// degrade to free-text decoding downstream.
fn parse_degree_level(value: Option<String>) -> Option<DegreeLevel> {
    value.as_deref().and_then(DegreeLevel::parse)
}

/// Assemble the read-only snapshot the scoring pass consumes: the candidate
/// row, the experience/education lists, and the per-category primary flags
/// from the document store. All of these tables are owned by the job-board
/// application; this module never writes them.
///
/// Returns `Ok(None)` when the candidate does not exist.
#[instrument(skip(pool))]
pub async fn fetch_profile_snapshot(
    pool: &PgPool,
    candidate_id: i64,
) -> Result<Option<ProfileSnapshot>, ProfileFetchError> {
    let client = pool.get().await?;

    let Some(candidate) = client
        .query_opt(
            "SELECT full_name, email, phone, location, headline
             FROM jobboard.candidates
             WHERE id = $1",
            &[&candidate_id],
        )
        .await?
    else {
        return Ok(None);
    };

    let experience = client
        .query(
            "SELECT title, company, location, start_date, end_date
             FROM jobboard.experience_entries
             WHERE candidate_id = $1
             ORDER BY start_date DESC NULLS LAST, id",
            &[&candidate_id],
        )
        .await?;

    let education = client
        .query(
            "SELECT institution, degree, degree_level, field_of_study, start_date, end_date
             FROM jobboard.education_entries
             WHERE candidate_id = $1
             ORDER BY start_date DESC NULLS LAST, id",
            &[&candidate_id],
        )
        .await?;

    // At most one row per category carries the primary flag.
    let primary_categories = client
        .query(
            "SELECT category
             FROM jobboard.candidate_documents
             WHERE candidate_id = $1 AND is_primary = TRUE",
            &[&candidate_id],
        )
        .await?;

    let mut has_primary_cv = false;
    let mut has_primary_photo = false;
    for row in &primary_categories {
        match row.get::<_, String>("category").as_str() {
            "cv" => has_primary_cv = true,
            "photo" => has_primary_photo = true,
            _ => {}
        }
    }

    Ok(Some(ProfileSnapshot {
        profile: CandidateProfile {
            full_name: candidate.get("full_name"),
            email: candidate.get("email"),
            phone: candidate.get("phone"),
            location: candidate.get("location"),
            headline: candidate.get("headline"),
            experience: experience.iter().map(experience_from_row).collect(),
            education: education.iter().map(education_from_row).collect(),
        },
        has_primary_cv,
        has_primary_photo,
    }))
}

/// Candidates who applied to a posting, in application order. Application
/// rows are collaborator-owned; the rescorer only reads the ids.
#[instrument(skip(pool))]
pub async fn fetch_applicant_ids(
    pool: &PgPool,
    job_posting_id: i64,
) -> Result<Vec<i64>, ProfileFetchError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT candidate_id
             FROM jobboard.applications
             WHERE job_posting_id = $1
             ORDER BY created_at, candidate_id",
            &[&job_posting_id],
        )
        .await?;

    Ok(rows.iter().map(|row| row.get("candidate_id")).collect())
}
