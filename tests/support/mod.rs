//! Shared test harness: an in-memory student store and state wiring.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use registrar::{
    config::{Config, DatabaseConfig, LoggingConfig, ServerConfig},
    db::{search::Predicate, StudentStore},
    models::StudentRecord,
    AppState, Result,
};

/// In-memory store evaluating predicates directly. Counts store hits so
/// tests can assert that rejected requests never reach the store.
pub struct MemoryStudentStore {
    students: Vec<StudentRecord>,
    enrolled_ids: HashSet<i32>,
    calls: AtomicUsize,
}

impl MemoryStudentStore {
    pub fn new(
        students: Vec<StudentRecord>,
        enrolled_ids: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            students,
            enrolled_ids: enrolled_ids.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Two well-known roster entries; only Alexander has an enrollment.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                student(1, "Alexander", "Carson", "2010-09-01"),
                student(2, "Meredith", "Alonso", "2012-09-01"),
            ],
            [1],
        )
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn matches(&self, record: &StudentRecord, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|predicate| match predicate {
            Predicate::NameContains(value) => {
                contains_ci(&record.first_name, value) || contains_ci(&record.last_name, value)
            }
            Predicate::FirstNameContains(value) => contains_ci(&record.first_name, value),
            Predicate::LastNameContains(value) => contains_ci(&record.last_name, value),
            Predicate::EnrolledOnOrAfter(date) => record.enrollment_date >= *date,
            Predicate::EnrolledOnOrBefore(date) => record.enrollment_date <= *date,
            Predicate::HasEnrollments(has) => self.enrolled_ids.contains(&record.id) == *has,
        })
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn count(&self, predicates: &[Predicate]) -> Result<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .students
            .iter()
            .filter(|s| self.matches(s, predicates))
            .count() as i64)
    }

    async fn fetch_page(
        &self,
        predicates: &[Predicate],
        page: u32,
        page_size: u32,
    ) -> Result<Vec<StudentRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut matched: Vec<StudentRecord> = self
            .students
            .iter()
            .filter(|s| self.matches(s, predicates))
            .cloned()
            .collect();
        matched.sort_by_key(|s| s.id);

        let offset = (page.saturating_sub(1) * page_size) as usize;
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StudentRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.students.iter().find(|s| s.id == id).cloned())
    }
}

pub fn student(id: i32, first: &str, last: &str, enrolled: &str) -> StudentRecord {
    StudentRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        enrollment_date: enrolled.parse::<NaiveDate>().unwrap(),
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".to_string()],
            max_request_body_size: 1024 * 1024,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
            run_migrations: false,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            json: false,
        },
    }
}

pub fn state_with(store: Arc<MemoryStudentStore>) -> AppState {
    AppState::with_store(test_config(), store)
}
