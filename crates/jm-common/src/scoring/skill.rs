use super::round_to_tenth;
use super::weights::{SKILL_BLEND, TOTAL_WEIGHTS};

/// Upper bound for the skill and total scores.
pub const MAX_SCORE: f64 = 10.0;

/// Blend experience years and the qualification tier into one bounded score.
///
/// The blend is rounded to one decimal and capped at [`MAX_SCORE`]; long
/// careers saturate rather than overflow the scale.
pub fn compute_skill_score(experience_years: f64, qualification_score: f64) -> f64 {
    let blended = experience_years * SKILL_BLEND.experience
        + qualification_score * SKILL_BLEND.qualification;

    round_to_tenth(blended).min(MAX_SCORE)
}

/// Weighted total persisted on the matching record, range [0, 10].
/// Experience enters capped at [`MAX_SCORE`].
pub fn compute_total_score(
    skill_score: f64,
    experience_years: f64,
    qualification_score: f64,
) -> f64 {
    let capped_experience = experience_years.min(MAX_SCORE);
    let total = skill_score * TOTAL_WEIGHTS.skill
        + capped_experience * TOTAL_WEIGHTS.experience
        + qualification_score * TOTAL_WEIGHTS.qualification;

    round_to_tenth(total)
}
