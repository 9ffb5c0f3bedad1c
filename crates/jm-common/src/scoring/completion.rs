use crate::CandidateProfile;

/// Percentage of the fixed profile checklist that is filled in.
///
/// Nine equally weighted checks: the five scalar fields are present
/// (non-blank after trim), the experience and education lists are non-empty,
/// and the candidate has flagged a primary CV and a primary photo. The
/// primary flags are the canonical signal; raw "ever uploaded" state is not
/// consulted (see DESIGN.md).
pub fn compute_profile_completion(
    profile: &CandidateProfile,
    has_primary_cv: bool,
    has_primary_photo: bool,
) -> u8 {
    let checks = [
        is_present(&profile.full_name),
        is_present(&profile.email),
        is_present(&profile.phone),
        is_present(&profile.location),
        is_present(&profile.headline),
        !profile.experience.is_empty(),
        !profile.education.is_empty(),
        has_primary_cv,
        has_primary_photo,
    ];

    let filled = checks.iter().filter(|check| **check).count();
    (filled as f64 / checks.len() as f64 * 100.0).round() as u8
}

fn is_present(field: &Option<String>) -> bool {
    field
        .as_deref()
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}
