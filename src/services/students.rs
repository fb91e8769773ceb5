//! Student record lookups and listings.

use std::sync::Arc;

use crate::{
    db::{search::Predicate, traits::StudentStore},
    models::{SearchFilter, StudentRecord},
    services::sanitize::sanitize,
    Error, Result,
};

/// Plain record access: paginated listings, single lookups, totals.
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Paginated listing ordered by ascending id. Pagination goes through
    /// the same sanitization and query path as search, with an empty
    /// predicate set.
    pub async fn list(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Vec<StudentRecord>> {
        let filter = sanitize(SearchFilter {
            page,
            page_size,
            ..SearchFilter::default()
        });
        let predicates = Predicate::from_filter(&filter);

        self.store
            .fetch_page(
                &predicates,
                filter.page_or_default(),
                filter.page_size_or_default(),
            )
            .await
    }

    /// Single-record lookup.
    pub async fn get_by_id(&self, id: i32) -> Result<StudentRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Student not found".to_string()))
    }

    /// Total number of students on the roster.
    pub async fn count(&self) -> Result<i64> {
        self.store.count(&[]).await
    }
}
