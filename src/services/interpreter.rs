//! Natural-language query interpretation.
//!
//! Maps a free-text search string onto a [`SearchFilter`] by folding a fixed
//! battery of pattern rules over an initially-empty filter. Rules are applied
//! in declaration order and are independent; when two rules set the same
//! field the later one wins, so `last N months` overwrites an earlier
//! `after <year>` match. Interpretation never fails: input matching no rule
//! yields an empty filter, and malformed numeric tokens leave their field
//! unset.
//!
//! The `last N months` rule depends on the current date. [`parse`] reads the
//! wall clock; [`parse_with_reference`] takes the reference date explicitly
//! so callers and tests can pin it.

use chrono::{Months, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::SearchFilter;

lazy_static! {
    static ref NAME_TRIGGER: Regex = Regex::new(r"(?i)(?:find|name|student)\s+(\w+)").unwrap();
    static ref AFTER_YEAR: Regex = Regex::new(r"(?i)after\s+(\d{4})").unwrap();
    static ref BEFORE_YEAR: Regex = Regex::new(r"(?i)before\s+(\d{4})").unwrap();
    static ref LAST_MONTHS: Regex = Regex::new(r"(?i)last\s+(\d+)\s+months?").unwrap();
}

type Rule = fn(&str, NaiveDate, &mut SearchFilter);

/// Rule battery in application order. Order is load-bearing for fields that
/// more than one rule can set (`enrolled_after`).
const RULES: &[Rule] = &[
    name_trigger,
    after_year,
    before_year,
    last_months,
    enrollment_phrases,
];

/// Interpret `text` against today's date.
pub fn parse(text: &str) -> SearchFilter {
    parse_with_reference(text, Utc::now().date_naive())
}

/// Interpret `text` with an explicit reference date for relative-date rules.
pub fn parse_with_reference(text: &str, today: NaiveDate) -> SearchFilter {
    RULES.iter().fold(SearchFilter::default(), |mut filter, rule| {
        rule(text, today, &mut filter);
        filter
    })
}

/// `find <word>`, `name <word>`, or `student <word>` sets the name filter to
/// the captured word, case preserved as typed.
fn name_trigger(text: &str, _today: NaiveDate, filter: &mut SearchFilter) {
    if let Some(caps) = NAME_TRIGGER.captures(text) {
        filter.name_contains = Some(caps[1].to_string());
    }
}

/// `after <year>` lower-bounds enrollment at January 1 of that year.
fn after_year(text: &str, _today: NaiveDate, filter: &mut SearchFilter) {
    if let Some(date) = captured_year(&AFTER_YEAR, text)
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    {
        filter.enrolled_after = Some(date);
    }
}

/// `before <year>` upper-bounds enrollment at December 31 of that year.
fn before_year(text: &str, _today: NaiveDate, filter: &mut SearchFilter) {
    if let Some(date) = captured_year(&BEFORE_YEAR, text)
        .and_then(|year| NaiveDate::from_ymd_opt(year, 12, 31))
    {
        filter.enrolled_before = Some(date);
    }
}

/// `last <N> month(s)` lower-bounds enrollment at N calendar months before
/// the reference date.
fn last_months(text: &str, today: NaiveDate, filter: &mut SearchFilter) {
    let months = match LAST_MONTHS
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
    {
        Some(months) => months,
        None => return,
    };

    if let Some(date) = today.checked_sub_months(Months::new(months)) {
        filter.enrolled_after = Some(date);
    }
}

/// `with enrollments` or `enrolled in` requires at least one enrollment.
/// No phrase ever sets the constraint to `false`.
fn enrollment_phrases(text: &str, _today: NaiveDate, filter: &mut SearchFilter) {
    let lower = text.to_lowercase();
    if lower.contains("with enrollments") || lower.contains("enrolled in") {
        filter.has_enrollments = Some(true);
    }
}

fn captured_year(pattern: &Regex, text: &str) -> Option<i32> {
    pattern.captures(text).and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn find_trigger_captures_name_with_typed_case() {
        let filter = parse_with_reference("find Alexander", reference());
        assert_eq!(filter.name_contains.as_deref(), Some("Alexander"));
    }

    #[test]
    fn trigger_words_are_case_insensitive() {
        let filter = parse_with_reference("FIND Bob", reference());
        assert_eq!(filter.name_contains.as_deref(), Some("Bob"));
    }

    #[test]
    fn plural_students_is_not_a_name_trigger() {
        let filter = parse_with_reference("students enrolled after 2020", reference());
        assert_eq!(filter.name_contains, None);
    }

    #[test]
    fn after_year_sets_january_first() {
        let filter = parse_with_reference("students enrolled after 2020", reference());
        assert_eq!(
            filter.enrolled_after,
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(filter.has_enrollments, None);
    }

    #[test]
    fn before_year_sets_december_thirty_first() {
        let filter = parse_with_reference("students enrolled before 2019", reference());
        assert_eq!(
            filter.enrolled_before,
            NaiveDate::from_ymd_opt(2019, 12, 31)
        );
    }

    #[test]
    fn last_months_subtracts_calendar_months_from_reference() {
        let filter =
            parse_with_reference("students enrolled in the last 6 months", reference());
        assert_eq!(
            filter.enrolled_after,
            NaiveDate::from_ymd_opt(2026, 2, 7)
        );
        // "enrolled in" also matches the enrollment phrase.
        assert_eq!(filter.has_enrollments, Some(true));
    }

    #[test]
    fn last_months_against_wall_clock_stays_near_expected_window() {
        let filter = parse("enrolled in the last 6 months");
        let expected = Utc::now()
            .date_naive()
            .checked_sub_months(Months::new(6))
            .unwrap();
        let observed = filter.enrolled_after.unwrap();
        assert!((observed - expected).num_days().abs() <= 31);
    }

    #[test]
    fn last_months_overwrites_after_year() {
        let filter = parse_with_reference("after 2015 in the last 2 months", reference());
        assert_eq!(
            filter.enrolled_after,
            NaiveDate::from_ymd_opt(2026, 6, 7)
        );
    }

    #[test]
    fn oversized_month_count_leaves_field_unset() {
        let filter = parse_with_reference("last 99999999999999999999 months", reference());
        assert_eq!(filter.enrolled_after, None);
    }

    #[test]
    fn with_enrollments_phrase_sets_constraint_true() {
        let filter = parse_with_reference("students with enrollments", reference());
        assert_eq!(filter.has_enrollments, Some(true));
    }

    #[test]
    fn without_enrollments_never_sets_false() {
        let filter = parse_with_reference("students without enrollments", reference());
        assert_eq!(filter.has_enrollments, None);
    }

    #[test]
    fn empty_input_yields_empty_filter() {
        assert_eq!(
            parse_with_reference("", reference()),
            SearchFilter::default()
        );
    }

    #[test]
    fn unrecognized_input_yields_empty_filter() {
        assert_eq!(
            parse_with_reference("show me everything please", reference()),
            SearchFilter::default()
        );
    }

    #[test]
    fn independent_rules_accumulate_into_one_filter() {
        let filter = parse_with_reference(
            "find Carson enrolled after 2009 and before 2015 with enrollments",
            reference(),
        );
        assert_eq!(filter.name_contains.as_deref(), Some("Carson"));
        assert_eq!(filter.enrolled_after, NaiveDate::from_ymd_opt(2009, 1, 1));
        assert_eq!(filter.enrolled_before, NaiveDate::from_ymd_opt(2015, 12, 31));
        assert_eq!(filter.has_enrollments, Some(true));
    }
}
