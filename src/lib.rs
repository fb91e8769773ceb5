//! Registrar - student records API server
//!
//! An HTTP API over a PostgreSQL student roster with:
//! - Natural-language search interpreted into structured filters
//! - A sanitization gate enforcing filter invariants before query building
//! - Parameterized dynamic queries with bounded offset/limit pagination
//! - Single-record lookup and paginated listings

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
