//! Natural-language search handler.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{SearchFilter, StudentRecord},
    state::AppState,
    Error, Result,
};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    students: Vec<StudentRecord>,
    total: i64,
    page: u32,
    page_size: u32,
    /// The filter actually applied, echoed back for transparency.
    parsed_filter: SearchFilter,
}

/// Search students with natural language (POST /api/search/students)
///
/// An absent, non-string, or blank `query` is rejected before the store is
/// touched. Everything else flows through interpret → sanitize → execute.
pub async fn search_students(
    State(state): State<AppState>,
    body: Option<Json<SearchRequest>>,
) -> Result<impl IntoResponse> {
    let query = body
        .as_ref()
        .and_then(|request| request.query.as_deref())
        .map(str::trim)
        .unwrap_or("");

    if query.is_empty() {
        return Err(Error::Validation(
            "Query is required and must be a non-empty string".to_string(),
        ));
    }

    let (result, filter) = state.search_service.search_natural(query).await?;

    Ok(Json(SearchResponse {
        students: result.students,
        total: result.total,
        page: result.page,
        page_size: result.page_size,
        parsed_filter: filter,
    }))
}
