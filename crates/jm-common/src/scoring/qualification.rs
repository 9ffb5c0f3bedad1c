use serde::{Deserialize, Serialize};

use crate::EducationEntry;

/// Degree classification captured at data entry.
///
/// New education rows carry an explicit level; rows created before the
/// taxonomy existed only have free text and go through [`classify_degree_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Doctorate,
    Masters,
    Bachelors,
    Diploma,
    Certificate,
    /// Degree text present but not classifiable into a named tier.
    Other,
}

impl DegreeLevel {
    /// Fixed ordinal score for the level. The full value set is
    /// {2, 3, 4, 6, 8, 10}; a candidate with no scored education at all
    /// reports 0 from [`compute_qualification_score`].
    pub fn score(&self) -> f64 {
        match self {
            DegreeLevel::Doctorate => 10.0,
            DegreeLevel::Masters => 8.0,
            DegreeLevel::Bachelors => 6.0,
            DegreeLevel::Diploma => 4.0,
            DegreeLevel::Certificate => 2.0,
            DegreeLevel::Other => 3.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeLevel::Doctorate => "doctorate",
            DegreeLevel::Masters => "masters",
            DegreeLevel::Bachelors => "bachelors",
            DegreeLevel::Diploma => "diploma",
            DegreeLevel::Certificate => "certificate",
            DegreeLevel::Other => "other",
        }
    }

    /// Inverse of [`as_str`], used when mapping stored rows.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "doctorate" => Some(DegreeLevel::Doctorate),
            "masters" => Some(DegreeLevel::Masters),
            "bachelors" => Some(DegreeLevel::Bachelors),
            "diploma" => Some(DegreeLevel::Diploma),
            "certificate" => Some(DegreeLevel::Certificate),
            "other" => Some(DegreeLevel::Other),
            _ => None,
        }
    }
}

struct QualificationTier {
    level: DegreeLevel,
    keywords: &'static [&'static str],
}

// Evaluated top-down; the first tier with a keyword hit wins.
const TIERS: &[QualificationTier] = &[
    QualificationTier {
        level: DegreeLevel::Doctorate,
        keywords: &["phd", "doctorate", "doctoral"],
    },
    QualificationTier {
        level: DegreeLevel::Masters,
        keywords: &["master", "mba", "msc", "ma"],
    },
    QualificationTier {
        level: DegreeLevel::Bachelors,
        keywords: &["bachelor", "bsc", "ba", "b.tech", "b.eng"],
    },
    QualificationTier {
        level: DegreeLevel::Diploma,
        keywords: &["diploma", "associate"],
    },
    QualificationTier {
        level: DegreeLevel::Certificate,
        keywords: &["certificate", "cert"],
    },
];

// Short aliases like "ma" and "ba" must match a whole word; raw substring
// matching would decode "diploma" as a Master's.
const WHOLE_WORD_MAX_LEN: usize = 3;

fn keyword_hits(text: &str, keyword: &str) -> bool {
    if keyword.len() > WHOLE_WORD_MAX_LEN {
        return text.contains(keyword);
    }

    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == keyword)
}

/// Decode a free-text degree description against the tier keyword table.
///
/// Matching is case-insensitive. Blank text yields `None`; non-blank text
/// with no keyword hit falls back to [`DegreeLevel::Other`].
pub fn classify_degree_text(degree: &str) -> Option<DegreeLevel> {
    let text = degree.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    for tier in TIERS {
        if tier.keywords.iter().any(|kw| keyword_hits(&text, kw)) {
            return Some(tier.level);
        }
    }

    Some(DegreeLevel::Other)
}

fn entry_level(entry: &EducationEntry) -> Option<DegreeLevel> {
    if let Some(level) = entry.degree_level {
        return Some(level);
    }

    entry.degree.as_deref().and_then(classify_degree_text)
}

/// Best qualification across the candidate's education history.
///
/// Per entry the explicit taxonomy level wins over text decoding; entries
/// with neither are skipped. The maximum score dominates, so adding a
/// higher-tier entry never lowers the result. No scored entries → 0.
pub fn compute_qualification_score(entries: &[EducationEntry]) -> f64 {
    entries
        .iter()
        .filter_map(entry_level)
        .map(|level| level.score())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_entry(degree: &str) -> EducationEntry {
        EducationEntry {
            degree: Some(degree.to_string()),
            ..EducationEntry::default()
        }
    }

    #[test]
    fn bachelor_of_science_scores_six() {
        let entries = vec![text_entry("Bachelor of Science")];
        assert_eq!(compute_qualification_score(&entries), 6.0);
    }

    #[test]
    fn best_qualification_dominates() {
        let entries = vec![text_entry("Bachelor's"), text_entry("Master's")];
        assert_eq!(compute_qualification_score(&entries), 8.0);

        let reversed = vec![text_entry("Master's"), text_entry("Bachelor's")];
        assert_eq!(compute_qualification_score(&reversed), 8.0);
    }

    #[test]
    fn classifies_each_tier() {
        assert_eq!(classify_degree_text("PhD in Physics"), Some(DegreeLevel::Doctorate));
        assert_eq!(classify_degree_text("MBA"), Some(DegreeLevel::Masters));
        assert_eq!(classify_degree_text("MSc Data Science"), Some(DegreeLevel::Masters));
        assert_eq!(classify_degree_text("B.Tech"), Some(DegreeLevel::Bachelors));
        assert_eq!(classify_degree_text("Associate of Arts"), Some(DegreeLevel::Diploma));
        assert_eq!(classify_degree_text("Certificate in Welding"), Some(DegreeLevel::Certificate));
    }

    #[test]
    fn short_aliases_match_whole_words_only() {
        assert_eq!(classify_degree_text("MA in Economics"), Some(DegreeLevel::Masters));
        assert_eq!(classify_degree_text("BA (Hons) History"), Some(DegreeLevel::Bachelors));
        // "diploma" contains "ma" but must not decode as a Master's.
        assert_eq!(
            classify_degree_text("Diploma in Engineering"),
            Some(DegreeLevel::Diploma)
        );
    }

    #[test]
    fn unmatched_text_falls_back_to_other() {
        assert_eq!(classify_degree_text("Bootcamp graduate"), Some(DegreeLevel::Other));
        let entries = vec![text_entry("Bootcamp graduate")];
        assert_eq!(compute_qualification_score(&entries), 3.0);
    }

    #[test]
    fn blank_degree_entries_are_skipped() {
        assert_eq!(classify_degree_text("   "), None);

        let entries = vec![text_entry("  "), EducationEntry::default()];
        assert_eq!(compute_qualification_score(&entries), 0.0);
    }

    #[test]
    fn explicit_level_beats_text_decoding() {
        let entry = EducationEntry {
            degree: Some("Master of Business Administration".into()),
            degree_level: Some(DegreeLevel::Certificate),
            ..EducationEntry::default()
        };
        assert_eq!(compute_qualification_score(&[entry]), 2.0);
    }

    #[test]
    fn empty_history_scores_zero() {
        assert_eq!(compute_qualification_score(&[]), 0.0);
    }

    #[test]
    fn level_strings_round_trip() {
        for level in [
            DegreeLevel::Doctorate,
            DegreeLevel::Masters,
            DegreeLevel::Bachelors,
            DegreeLevel::Diploma,
            DegreeLevel::Certificate,
            DegreeLevel::Other,
        ] {
            assert_eq!(DegreeLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(DegreeLevel::parse("unknown"), None);
    }
}
