//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `log`: Print the date-filtered first-parent history, oldest first
//! - `graph`: Render the same history as a graph image

pub mod graph;
pub mod log;
