//! PostgreSQL-backed student store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::search::{
        query_builder::{build_count_sql, build_page_sql, BindValue},
        Predicate,
    },
    db::traits::StudentStore,
    models::StudentRecord,
    Result,
};

/// Student store over a caller-owned connection pool.
///
/// The pool is passed in at construction; its sizing and acquire timeout are
/// configured by the caller.
#[derive(Debug, Clone)]
pub struct PostgresStudentStore {
    pool: PgPool,
}

impl PostgresStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn count(&self, predicates: &[Predicate]) -> Result<i64> {
        let (sql, bind_values) = build_count_sql(predicates);

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::Date(d) => query.bind(d),
                BindValue::Int(i) => query.bind(i),
            };
        }

        Ok(query.fetch_one(&self.pool).await?)
    }

    async fn fetch_page(
        &self,
        predicates: &[Predicate],
        page: u32,
        page_size: u32,
    ) -> Result<Vec<StudentRecord>> {
        let (sql, bind_values) = build_page_sql(predicates, page, page_size);

        let mut query = sqlx::query_as::<_, StudentRecord>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::Date(d) => query.bind(d),
                BindValue::Int(i) => query.bind(i),
            };
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRecord>(
            "SELECT s.id, s.first_name, s.last_name, s.enrollment_date \
             FROM students s WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }
}
