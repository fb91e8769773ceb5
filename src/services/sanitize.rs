//! Filter sanitization.
//!
//! The single gate between raw parsed filters and query construction. Output
//! always satisfies the filter invariants: bounded string lengths and
//! pagination present and in range. Total function; out-of-contract pieces
//! are degraded, never rejected. Date fields and the enrollment flag are
//! already strictly typed, so validity there is settled before a filter
//! reaches this pass.

use crate::models::{
    SearchFilter, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_NAME_CONTAINS_LEN, MAX_NAME_PART_LEN,
    MAX_PAGE, MAX_PAGE_SIZE,
};

/// Enforce the filter invariants on a raw filter.
///
/// Idempotent: sanitizing an already-sanitized filter is a no-op.
pub fn sanitize(raw: SearchFilter) -> SearchFilter {
    SearchFilter {
        name_contains: raw
            .name_contains
            .map(|value| truncate_chars(value, MAX_NAME_CONTAINS_LEN)),
        first_name_contains: raw
            .first_name_contains
            .map(|value| truncate_chars(value, MAX_NAME_PART_LEN)),
        last_name_contains: raw
            .last_name_contains
            .map(|value| truncate_chars(value, MAX_NAME_PART_LEN)),
        enrolled_after: raw.enrolled_after,
        enrolled_before: raw.enrolled_before,
        has_enrollments: raw.has_enrollments,
        page: Some(raw.page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE)),
        page_size: Some(
            raw.page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        ),
    }
}

/// Truncate to at most `max` characters, respecting character boundaries.
fn truncate_chars(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        value
    } else {
        value.chars().take(max).collect()
    }
}
