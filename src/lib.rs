//! Commit history graphs read straight from a git object store
//!
//! The history is reconstructed without invoking git: `HEAD` is resolved
//! through the reference files, each commit is read as a zlib-compressed loose
//! object, and the first-parent chain is followed until it ends. Commits made
//! before a start date are dropped, the rest are sorted by committer time and
//! drawn as a graph.
//!
//! - `areas`: Object database, references and the repository handle
//! - `artifacts`: Object IDs, commit decoding, history walking, graph output
//! - `commands`: The operations exposed by the command line
//! - `config`: Run settings
//! - `errors`: The library's error type

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

pub use errors::HistoryError;
