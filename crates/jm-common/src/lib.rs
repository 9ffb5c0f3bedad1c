pub mod db;
pub mod logging;
pub mod matching;
pub mod scoring;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use scoring::DegreeLevel;

// Commonly used data models for the scoring functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Upstream parse failures degrade to `None`; such entries are skipped
    /// by the duration aggregator rather than rejected.
    pub start_date: Option<NaiveDate>,
    /// `None` means the role is ongoing.
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    /// Free-text degree description as entered by the candidate.
    pub degree: Option<String>,
    /// Explicit taxonomy level captured at data entry. Rows created before
    /// the taxonomy existed carry `None` and fall back to text decoding.
    pub degree_level: Option<DegreeLevel>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

/// Read-only composite handed to the scoring pass: the candidate's profile
/// plus the per-category primary flags resolved from the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub profile: CandidateProfile,
    pub has_primary_cv: bool,
    pub has_primary_photo: bool,
}
