//! Git data structures and algorithms
//!
//! - `graph`: Commit graph construction and rendering
//! - `log`: Commit history traversal and filtering
//! - `objects`: Object IDs, loose object headers and commits

pub mod graph;
pub mod log;
pub mod objects;
