//! Request handlers

pub mod search;
pub mod students;
