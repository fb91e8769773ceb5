//! Student record and search result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One student as stored and served.
///
/// Snapshots are created and owned by the record store; the API layer only
/// reads and serializes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Calendar date only, no time component.
    pub enrollment_date: NaiveDate,
}

/// One page of search results plus the unpaginated match count.
///
/// `students` holds at most `page_size` records, ordered by ascending id;
/// `total` counts every row matching the predicates regardless of paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub students: Vec<StudentRecord>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}
