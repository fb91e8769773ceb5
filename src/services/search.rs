//! Search orchestration: interpret, sanitize, execute.

use std::sync::Arc;

use crate::{
    db::{search::Predicate, traits::StudentStore},
    models::{SearchFilter, SearchResult},
    services::{interpreter, sanitize::sanitize},
    Result,
};

/// Coordinates natural-language searches against the student store.
pub struct SearchService {
    store: Arc<dyn StudentStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Interpret a free-text query, sanitize the resulting filter, and
    /// execute it. Returns the result together with the filter that was
    /// actually applied, so callers can echo it back.
    pub async fn search_natural(&self, query: &str) -> Result<(SearchResult, SearchFilter)> {
        let filter = sanitize(interpreter::parse(query));
        tracing::debug!(query, filter = ?filter, "Interpreted natural language query");

        let result = self.execute(&filter).await?;
        Ok((result, filter))
    }

    /// Execute a sanitized filter: derive the predicate set once, count the
    /// matches, then fetch the requested page. Count and fetch observe the
    /// same predicate set.
    pub async fn execute(&self, filter: &SearchFilter) -> Result<SearchResult> {
        let predicates = Predicate::from_filter(filter);
        let page = filter.page_or_default();
        let page_size = filter.page_size_or_default();

        let total = self.store.count(&predicates).await?;
        let students = self
            .store
            .fetch_page(&predicates, page, page_size)
            .await?;

        Ok(SearchResult {
            students,
            total,
            page,
            page_size,
        })
    }
}
