use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::matching_records::MatchingRecordInsert;
use crate::scoring::{
    compute_experience_years, compute_profile_completion, compute_qualification_score,
    compute_skill_score, compute_total_score,
};
use crate::ProfileSnapshot;

/// Stamped onto every persisted record so score drift across releases can be
/// traced back to the engine that produced it.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scoring outputs for one candidate snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScores {
    pub experience_years: f64,
    pub qualification_score: f64,
    pub skill_score: f64,
    pub profile_completion: u8,
    pub total_score: f64,
}

/// Run the full scoring pass over one profile snapshot.
///
/// Pure composition of the scoring primitives in dependency order; safe to
/// run concurrently across unrelated (candidate, job posting) pairs.
pub fn score_snapshot(snapshot: &ProfileSnapshot, as_of: NaiveDate) -> CandidateScores {
    let experience_years = compute_experience_years(&snapshot.profile.experience, as_of);
    let qualification_score = compute_qualification_score(&snapshot.profile.education);
    let skill_score = compute_skill_score(experience_years, qualification_score);
    let profile_completion = compute_profile_completion(
        &snapshot.profile,
        snapshot.has_primary_cv,
        snapshot.has_primary_photo,
    );
    let total_score = compute_total_score(skill_score, experience_years, qualification_score);

    CandidateScores {
        experience_years,
        qualification_score,
        skill_score,
        profile_completion,
        total_score,
    }
}

impl CandidateScores {
    /// Build the row persisted for a (candidate, job posting) pair.
    pub fn to_record_insert(&self, candidate_id: i64, job_posting_id: i64) -> MatchingRecordInsert {
        MatchingRecordInsert {
            candidate_id,
            job_posting_id,
            skill_score: self.skill_score,
            experience_score: self.experience_years,
            qualification_score: self.qualification_score,
            total_score: self.total_score,
            engine_version: Some(ENGINE_VERSION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidateProfile, EducationEntry, ExperienceEntry};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn full_snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            profile: CandidateProfile {
                full_name: Some("Aiko Tanaka".into()),
                email: Some("aiko@example.com".into()),
                phone: Some("+81-90-0000-0000".into()),
                location: Some("Tokyo".into()),
                headline: Some("Backend engineer".into()),
                experience: vec![ExperienceEntry {
                    title: Some("Engineer".into()),
                    company: Some("Acme".into()),
                    start_date: Some(date("2023-06-30")),
                    end_date: Some(date("2025-06-30")),
                    ..ExperienceEntry::default()
                }],
                education: vec![EducationEntry {
                    degree: Some("Bachelor of Science".into()),
                    ..EducationEntry::default()
                }],
            },
            has_primary_cv: true,
            has_primary_photo: true,
        }
    }

    #[test]
    fn composes_all_scores() {
        let scores = score_snapshot(&full_snapshot(), as_of());

        assert_eq!(scores.experience_years, 2.0);
        assert_eq!(scores.qualification_score, 6.0);
        assert_eq!(scores.skill_score, 4.0);
        assert_eq!(scores.profile_completion, 100);
        // 4.0 * 0.5 + 2.0 * 0.25 + 6.0 * 0.25
        assert_eq!(scores.total_score, 4.0);
    }

    #[test]
    fn identical_input_produces_identical_output() {
        let snapshot = full_snapshot();
        assert_eq!(score_snapshot(&snapshot, as_of()), score_snapshot(&snapshot, as_of()));
    }

    #[test]
    fn empty_snapshot_yields_neutral_scores() {
        let scores = score_snapshot(&ProfileSnapshot::default(), as_of());

        assert_eq!(scores.experience_years, 0.0);
        assert_eq!(scores.qualification_score, 0.0);
        assert_eq!(scores.skill_score, 0.0);
        assert_eq!(scores.profile_completion, 0);
        assert_eq!(scores.total_score, 0.0);
    }

    #[test]
    fn record_insert_carries_scores_through() {
        let scores = score_snapshot(&full_snapshot(), as_of());
        let insert = scores.to_record_insert(7, 42);

        assert_eq!(insert.candidate_id, 7);
        assert_eq!(insert.job_posting_id, 42);
        assert_eq!(insert.skill_score, scores.skill_score);
        assert_eq!(insert.experience_score, scores.experience_years);
        assert_eq!(insert.qualification_score, scores.qualification_score);
        assert_eq!(insert.total_score, scores.total_score);
        assert_eq!(insert.engine_version.as_deref(), Some(ENGINE_VERSION));
    }
}
