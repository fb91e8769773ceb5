//! Student record handlers.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use crate::{state::AppState, Error, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    page: Option<String>,
    page_size: Option<String>,
}

/// Get all students with optional pagination (GET /api/students)
///
/// Malformed pagination values fall back to the defaults rather than
/// rejecting the request.
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let page = query.page.as_deref().and_then(|v| v.parse().ok());
    let page_size = query.page_size.as_deref().and_then(|v| v.parse().ok());

    let students = state.student_service.list(page, page_size).await?;
    Ok(Json(students))
}

/// Get student by ID (GET /api/students/:id)
///
/// - 400 if the identifier is not an integer
/// - 404 if no student has that identifier
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id: i32 = id
        .parse()
        .map_err(|_| Error::Validation("Invalid student ID".to_string()))?;

    let student = state.student_service.get_by_id(id).await?;
    Ok(Json(student))
}

/// Get total count of students (GET /api/students/stats/count)
pub async fn student_count(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let count = state.student_service.count().await?;
    Ok(Json(json!({ "count": count })))
}
