//! Command implementations
//!
//! - `plumbing`: Low-level access to single objects (cat-commit)
//! - `porcelain`: History commands built on top of it (log, graph)
//!
//! Commands are methods on `Repository` and write their output through the
//! repository's writer.

pub mod plumbing;
pub mod porcelain;
