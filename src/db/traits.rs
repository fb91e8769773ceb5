//! Store capability consumed by the search executor.

use async_trait::async_trait;

use crate::{db::search::Predicate, models::StudentRecord, Result};

/// Parameterized query capability over the student record set.
///
/// The executor derives one predicate set per search and hands that same set
/// to [`count`](StudentStore::count) and
/// [`fetch_page`](StudentStore::fetch_page); implementations evaluate both
/// against it without reinterpreting the filter. Connection acquisition,
/// pooling, and any retry policy belong to the implementation, not to
/// callers.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Count rows matching the predicate set, ignoring pagination.
    async fn count(&self, predicates: &[Predicate]) -> Result<i64>;

    /// Fetch one page of matching rows, ordered by ascending id, skipping
    /// `(page - 1) * page_size` rows and taking at most `page_size`.
    async fn fetch_page(
        &self,
        predicates: &[Predicate],
        page: u32,
        page_size: u32,
    ) -> Result<Vec<StudentRecord>>;

    /// Single-record lookup by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<StudentRecord>>;
}
