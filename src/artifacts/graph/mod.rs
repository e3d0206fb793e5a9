//! Commit graph construction and rendering
//!
//! - `commit_graph`: numbered nodes and parent → child edges built from a chain
//! - `render`: DOT output, or an image produced by the Graphviz `dot` program

pub mod commit_graph;
pub mod render;
