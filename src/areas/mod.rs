//! Core repository components
//!
//! - `database`: Read-only object database (loose objects) and the in-memory store
//! - `refs`: Reference resolution (HEAD, branches, tags)
//! - `repository`: Ties the git directory, database and refs together

pub mod database;
pub mod refs;
pub mod repository;
