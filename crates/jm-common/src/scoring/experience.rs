use chrono::NaiveDate;

use super::round_to_tenth;
use crate::ExperienceEntry;

const DAYS_PER_YEAR: f64 = 365.25;

/// Sum the elapsed years across a candidate's work history.
///
/// - Entries without a start date are skipped entirely.
/// - A missing end date means the role is ongoing; `as_of` is the effective end.
/// - Spans that end before they start clamp to zero.
/// - Concurrent roles are summed additively, not merged.
///
/// The result is never negative and is rounded to one decimal place.
/// `as_of` is an explicit parameter so repeated calls with identical input
/// return identical output.
pub fn compute_experience_years(entries: &[ExperienceEntry], as_of: NaiveDate) -> f64 {
    let total: f64 = entries
        .iter()
        .filter_map(|entry| entry_years(entry, as_of))
        .sum();

    round_to_tenth(total)
}

fn entry_years(entry: &ExperienceEntry, as_of: NaiveDate) -> Option<f64> {
    let start = entry.start_date?;
    let end = entry.end_date.unwrap_or(as_of);
    let days = (end - start).num_days().max(0);

    Some(days as f64 / DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: Option<&str>, end: Option<&str>) -> ExperienceEntry {
        let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        ExperienceEntry {
            start_date: start.map(parse),
            end_date: end.map(parse),
            ..ExperienceEntry::default()
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn empty_history_scores_zero() {
        assert_eq!(compute_experience_years(&[], as_of()), 0.0);
    }

    #[test]
    fn two_year_span_rounds_to_two() {
        let entries = vec![entry(Some("2020-01-01"), Some("2022-01-01"))];
        assert_eq!(compute_experience_years(&entries, as_of()), 2.0);
    }

    #[test]
    fn ongoing_role_ends_at_as_of() {
        let entries = vec![entry(Some("2024-06-30"), None)];
        assert_eq!(compute_experience_years(&entries, as_of()), 1.0);
    }

    #[test]
    fn entries_without_start_are_skipped() {
        let entries = vec![
            entry(None, Some("2022-01-01")),
            entry(Some("2020-01-01"), Some("2021-01-01")),
        ];
        assert_eq!(compute_experience_years(&entries, as_of()), 1.0);
    }

    #[test]
    fn reversed_span_clamps_to_zero() {
        let entries = vec![entry(Some("2022-01-01"), Some("2020-01-01"))];
        assert_eq!(compute_experience_years(&entries, as_of()), 0.0);
    }

    #[test]
    fn concurrent_roles_sum_additively() {
        let entries = vec![
            entry(Some("2020-01-01"), Some("2022-01-01")),
            entry(Some("2021-01-01"), Some("2022-01-01")),
        ];
        assert_eq!(compute_experience_years(&entries, as_of()), 3.0);
    }

    #[test]
    fn total_is_never_negative() {
        let entries = vec![
            entry(Some("2023-05-01"), Some("2021-05-01")),
            entry(None, None),
        ];
        assert!(compute_experience_years(&entries, as_of()) >= 0.0);
    }
}
