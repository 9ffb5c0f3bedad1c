pub mod completion;
pub mod experience;
pub mod qualification;
pub mod skill;
pub mod weights;

pub use completion::compute_profile_completion;
pub use experience::compute_experience_years;
pub use qualification::{classify_degree_text, compute_qualification_score, DegreeLevel};
pub use skill::{compute_skill_score, compute_total_score, MAX_SCORE};

/// Scores are reported at one-decimal resolution throughout.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
