//! SQL generation for student searches.
//!
//! Builds the count and page queries from one predicate set. Every
//! user-supplied value travels through the bind vector and is referenced as
//! a `$n` placeholder; nothing user-controlled is formatted into the SQL
//! text. The page query orders by ascending id and binds its offset and
//! limit; the count query evaluates the identical WHERE clause with no
//! pagination.

use chrono::NaiveDate;

use super::predicate::Predicate;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Date(NaiveDate),
    Int(i64),
}

fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

fn push_date(bind_params: &mut Vec<BindValue>, value: NaiveDate) -> usize {
    bind_params.push(BindValue::Date(value));
    bind_params.len()
}

fn push_int(bind_params: &mut Vec<BindValue>, value: i64) -> usize {
    bind_params.push(BindValue::Int(value));
    bind_params.len()
}

const SELECT_COLUMNS: &str =
    "SELECT s.id, s.first_name, s.last_name, s.enrollment_date FROM students s";

/// Build the page query: predicates, deterministic ordering, bound
/// offset/limit.
pub(crate) fn build_page_sql(
    predicates: &[Predicate],
    page: u32,
    page_size: u32,
) -> (String, Vec<BindValue>) {
    let mut sql = String::from(SELECT_COLUMNS);
    let mut bind_params = Vec::new();

    push_where(predicates, &mut sql, &mut bind_params);
    sql.push_str(" ORDER BY s.id ASC");

    let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);
    let offset_idx = push_int(&mut bind_params, offset);
    let limit_idx = push_int(&mut bind_params, i64::from(page_size));
    sql.push_str(&format!(" OFFSET ${} LIMIT ${}", offset_idx, limit_idx));

    (sql, bind_params)
}

/// Build the count query over the same predicate clauses, no pagination.
pub(crate) fn build_count_sql(predicates: &[Predicate]) -> (String, Vec<BindValue>) {
    let mut sql = String::from("SELECT COUNT(*) FROM students s");
    let mut bind_params = Vec::new();

    push_where(predicates, &mut sql, &mut bind_params);

    (sql, bind_params)
}

fn push_where(predicates: &[Predicate], sql: &mut String, bind_params: &mut Vec<BindValue>) {
    for (i, predicate) in predicates.iter().enumerate() {
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        sql.push_str(&build_predicate_clause(predicate, bind_params));
    }
}

fn build_predicate_clause(predicate: &Predicate, bind_params: &mut Vec<BindValue>) -> String {
    match predicate {
        Predicate::NameContains(value) => {
            let first_idx = push_text(bind_params, contains_pattern(value));
            let last_idx = push_text(bind_params, contains_pattern(value));
            format!(
                "(s.first_name ILIKE ${} OR s.last_name ILIKE ${})",
                first_idx, last_idx
            )
        }
        Predicate::FirstNameContains(value) => {
            let idx = push_text(bind_params, contains_pattern(value));
            format!("s.first_name ILIKE ${}", idx)
        }
        Predicate::LastNameContains(value) => {
            let idx = push_text(bind_params, contains_pattern(value));
            format!("s.last_name ILIKE ${}", idx)
        }
        Predicate::EnrolledOnOrAfter(date) => {
            let idx = push_date(bind_params, *date);
            format!("s.enrollment_date >= ${}", idx)
        }
        Predicate::EnrolledOnOrBefore(date) => {
            let idx = push_date(bind_params, *date);
            format!("s.enrollment_date <= ${}", idx)
        }
        Predicate::HasEnrollments(has) => {
            let exists = "EXISTS (SELECT 1 FROM enrollments e WHERE e.student_id = s.id)";
            if *has {
                exists.to_string()
            } else {
                format!("NOT {}", exists)
            }
        }
    }
}

fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like_pattern(value))
}

/// Escape SQL LIKE meta-characters so user input is treated literally.
fn escape_like_pattern(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
