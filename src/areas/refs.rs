//! Git references (HEAD, branches, tags)
//!
//! References are human-readable names pointing to commits. A reference file
//! contains either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references, e.g. `ref: refs/heads/main`
//!
//! Resolution follows at most one level of indirection: HEAD may name a
//! branch, and the branch must name a commit.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::HistoryError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Marker opening a symbolic reference
const SYMREF_PREFIX: &str = "ref:";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Directories searched, in order, when resolving a short reference name
const REF_SEARCH_PREFIXES: [&str; 4] = ["", "refs", "refs/heads", "refs/tags"];

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

/// Content of a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref, relative to the git directory
    SymRef(String),
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> Result<SymRefOrOid, HistoryError> {
        let content = Refs::read_ref_file(path)?;

        match content.strip_prefix(SYMREF_PREFIX) {
            Some(target) => Ok(SymRefOrOid::SymRef(target.trim().to_string())),
            None => Ok(SymRefOrOid::Oid(ObjectId::try_parse(content)?)),
        }
    }
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Resolve HEAD to the commit it names
    ///
    /// A symbolic HEAD is followed to the branch file; a detached HEAD holds
    /// the hash itself.
    pub fn read_head(&self) -> Result<ObjectId, HistoryError> {
        self.read_oid(&self.head_path())
    }

    /// Resolve a revision given by the user
    ///
    /// Accepts `HEAD`, a full ref path (`refs/heads/main`), a short branch or
    /// tag name (`main`, `v1.0`), or a full object ID. Names are looked up as
    /// refs before being tried as a hash.
    pub fn resolve(&self, revision: &str) -> Result<ObjectId, HistoryError> {
        if revision == HEAD_REF_NAME {
            return self.read_head();
        }

        for prefix in REF_SEARCH_PREFIXES {
            let ref_path = self.path.join(prefix).join(revision);
            if ref_path.is_file() {
                tracing::debug!(path = %ref_path.display(), "resolved revision {revision}");
                return self.read_oid(&ref_path);
            }
        }

        if revision.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(revision);
        }

        Err(HistoryError::RefNotFound {
            path: self.path.join("refs").join("heads").join(revision),
        })
    }

    /// Read the object ID a ref file names, following one symbolic hop
    fn read_oid(&self, path: &Path) -> Result<ObjectId, HistoryError> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            SymRefOrOid::Oid(oid) => Ok(oid),
            SymRefOrOid::SymRef(target) => {
                let target_path = self.path.join(&target);
                tracing::trace!(from = %path.display(), to = %target_path.display(), "following symbolic ref");

                ObjectId::try_parse(Self::read_ref_file(&target_path)?)
            }
        }
    }

    /// Read the trimmed content of a ref file; an empty file counts as missing
    fn read_ref_file(path: &Path) -> Result<String, HistoryError> {
        if !path.is_file() {
            return Err(HistoryError::RefNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Err(HistoryError::RefNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(content.to_string())
    }
}
