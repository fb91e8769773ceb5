//! HTTP route definitions.

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{search, students};
use crate::state::AppState;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        // Exact routes before the parameterized id route.
        .route("/", get(students::list_students))
        .route("/stats/count", get(students::student_count))
        .route("/:id", get(students::get_student))
}

pub fn search_routes() -> Router<AppState> {
    Router::new().route("/students", post(search::search_students))
}
