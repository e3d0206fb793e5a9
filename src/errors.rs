//! Error taxonomy for reading the object store and walking history
//!
//! Every failure the library can produce is a [`HistoryError`]. Only
//! [`HistoryError::ObjectNotFound`] is ever recovered, and only by the history
//! walker, where a missing parent object marks the end of the available
//! ancestry. Everything else is fatal for the current walk.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Errors from object, reference and history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("invalid object hash {hash:?}: {reason}")]
    InvalidHash { hash: String, reason: String },

    #[error("object {oid} not found at {}", path.display())]
    ObjectNotFound { oid: ObjectId, path: PathBuf },

    #[error("corrupt object {oid}: {source}")]
    CorruptObject {
        oid: ObjectId,
        #[source]
        source: std::io::Error,
    },

    #[error("object {oid} is not valid UTF-8: {source}")]
    DecodeError {
        oid: ObjectId,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("commit {oid} has a malformed committer line: {reason}")]
    MalformedCommitter { oid: ObjectId, reason: String },

    #[error("object {oid} is a {actual}, expected a commit")]
    UnexpectedObjectType { oid: ObjectId, actual: String },

    #[error("reference not found at {}", path.display())]
    RefNotFound { path: PathBuf },

    #[error("history broken at commit {oid}: {source}")]
    BrokenChain {
        oid: ObjectId,
        #[source]
        source: Box<HistoryError>,
    },

    #[error("cycle detected: commit {oid} was reached twice")]
    CycleDetected { oid: ObjectId },

    #[error("history exceeds the limit of {limit} commits")]
    HistoryTooLong { limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HistoryError {
    /// True for the one condition the walker treats as the end of history.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HistoryError::ObjectNotFound { .. })
    }
}

pub type Result<T, E = HistoryError> = std::result::Result<T, E>;
