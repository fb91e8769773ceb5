//! Structured search filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound on `name_contains` after sanitization.
pub const MAX_NAME_CONTAINS_LEN: usize = 100;
/// Upper bound on `first_name_contains` / `last_name_contains` after sanitization.
pub const MAX_NAME_PART_LEN: usize = 50;
/// Highest page a caller can request.
pub const MAX_PAGE: u32 = 1000;
/// Largest page size a caller can request.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Page used when the caller supplies none.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Structured constraints derived from a search request.
///
/// All content fields are optional; an absent field contributes no predicate.
/// Date bounds are inclusive and carry no time component. A filter built by
/// [`crate::services::sanitize::sanitize`] additionally has `page` and
/// `page_size` present and within range; only such filters may reach query
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilter {
    /// Case-insensitive substring match against first or last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_contains: Option<String>,
    /// Inclusive lower bound on the enrollment date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled_after: Option<NaiveDate>,
    /// Inclusive upper bound on the enrollment date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled_before: Option<NaiveDate>,
    /// Tri-state: `None` means no constraint on enrollment membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_enrollments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl SearchFilter {
    /// Requested page with the sanitizer default applied.
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Requested page size with the sanitizer default applied.
    pub fn page_size_or_default(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
