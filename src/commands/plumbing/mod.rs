//! Plumbing commands (low-level object access)
//!
//! ## Commands
//!
//! - `cat-commit`: Decode one commit object and print its parent and time

pub mod cat_file;
