//! Typed predicate descriptors.
//!
//! Each populated filter field contributes exactly one descriptor; absent
//! fields contribute none. Descriptors combine with logical AND. The set is
//! derived once per search so the count and fetch steps always evaluate the
//! same constraints.

use chrono::NaiveDate;

use crate::models::SearchFilter;

/// One condition on a student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring over first OR last name.
    NameContains(String),
    /// Case-insensitive substring over the first name.
    FirstNameContains(String),
    /// Case-insensitive substring over the last name.
    LastNameContains(String),
    /// Inclusive lower bound on the enrollment date.
    EnrolledOnOrAfter(NaiveDate),
    /// Inclusive upper bound on the enrollment date.
    EnrolledOnOrBefore(NaiveDate),
    /// Existence (`true`) or absence (`false`) of any enrollment row for the
    /// student.
    HasEnrollments(bool),
}

impl Predicate {
    /// Derive the predicate set for a sanitized filter.
    pub fn from_filter(filter: &SearchFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(value) = &filter.name_contains {
            predicates.push(Predicate::NameContains(value.clone()));
        }
        if let Some(value) = &filter.first_name_contains {
            predicates.push(Predicate::FirstNameContains(value.clone()));
        }
        if let Some(value) = &filter.last_name_contains {
            predicates.push(Predicate::LastNameContains(value.clone()));
        }
        if let Some(date) = filter.enrolled_after {
            predicates.push(Predicate::EnrolledOnOrAfter(date));
        }
        if let Some(date) = filter.enrolled_before {
            predicates.push(Predicate::EnrolledOnOrBefore(date));
        }
        if let Some(has) = filter.has_enrollments {
            predicates.push(Predicate::HasEnrollments(has));
        }

        predicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_yields_no_predicates() {
        assert!(Predicate::from_filter(&SearchFilter::default()).is_empty());
    }

    #[test]
    fn each_populated_field_contributes_one_predicate() {
        let filter = SearchFilter {
            name_contains: Some("Carson".to_string()),
            first_name_contains: Some("Alex".to_string()),
            last_name_contains: Some("son".to_string()),
            enrolled_after: NaiveDate::from_ymd_opt(2010, 1, 1),
            enrolled_before: NaiveDate::from_ymd_opt(2020, 12, 31),
            has_enrollments: Some(true),
            page: Some(1),
            page_size: Some(50),
        };
        let predicates = Predicate::from_filter(&filter);
        assert_eq!(predicates.len(), 6);
        assert!(predicates.contains(&Predicate::NameContains("Carson".to_string())));
        assert!(predicates.contains(&Predicate::HasEnrollments(true)));
    }

    #[test]
    fn pagination_contributes_no_predicate() {
        let filter = SearchFilter {
            page: Some(7),
            page_size: Some(10),
            ..SearchFilter::default()
        };
        assert!(Predicate::from_filter(&filter).is_empty());
    }
}
