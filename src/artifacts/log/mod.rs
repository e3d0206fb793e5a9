//! Commit history traversal
//!
//! - `rev_list`: first-parent walk from a starting commit, with a date filter
//! - `commit_chain`: the walk's result, sorted by committer time
//!
//! ## Algorithm
//!
//! The walk follows one parent pointer per commit until it reaches a root
//! commit or a parent missing from the object store. A visited set stops it
//! on corrupted stores whose parent pointers form a cycle. The kept commits
//! are sorted by committer timestamp with a stable sort.

pub mod commit_chain;
pub mod rev_list;
