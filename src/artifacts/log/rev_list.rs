use crate::areas::database::ObjectStore;
use crate::artifacts::log::commit_chain::CommitChain;
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::HistoryError;
use chrono::{DateTime, Utc};
use derive_new::new;
use std::collections::HashSet;

/// First-parent history starting at a commit
///
/// The walk ends at a root commit, or quietly at the first parent whose
/// object is missing from the store.
#[derive(Clone, new)]
pub struct RevList<'s, S: ObjectStore + ?Sized> {
    store: &'s S,
    start_oid: ObjectId,
    #[new(default)]
    max_commits: Option<usize>,
}

impl<'s, S: ObjectStore + ?Sized> RevList<'s, S> {
    /// Fail with [`HistoryError::HistoryTooLong`] after `limit` commits
    pub fn with_max_commits(mut self, limit: Option<usize>) -> Self {
        self.max_commits = limit;
        self
    }

    /// Walk the whole history, keeping commits made at or after `boundary`
    pub fn since(self, boundary: DateTime<Utc>) -> Result<CommitChain, HistoryError> {
        let mut iter = self.into_iter();
        let mut kept = Vec::new();

        for commit in iter.by_ref() {
            let commit = commit?;
            tracing::debug!(
                oid = %commit.oid(),
                committed_at = %commit.committed_at(),
                "walked commit"
            );

            if commit.committed_at() >= boundary {
                kept.push(commit);
            }
        }

        tracing::info!(
            traversed = iter.visited.len(),
            kept = kept.len(),
            since = %boundary,
            "history walk finished"
        );

        Ok(CommitChain::new(kept, iter.visited))
    }
}

impl<'s, S: ObjectStore + ?Sized> IntoIterator for RevList<'s, S> {
    type Item = Result<CommitRecord, HistoryError>;
    type IntoIter = RevListIntoIter<'s, S>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            store: self.store,
            current_commit_oid: Some(self.start_oid),
            max_commits: self.max_commits,
            visited: HashSet::new(),
            loaded: 0,
        }
    }
}

/// Commits in discovery order, newest first
pub struct RevListIntoIter<'s, S: ObjectStore + ?Sized> {
    store: &'s S,
    current_commit_oid: Option<ObjectId>,
    max_commits: Option<usize>,
    visited: HashSet<ObjectId>,
    loaded: usize,
}

impl<S: ObjectStore + ?Sized> Iterator for RevListIntoIter<'_, S> {
    type Item = Result<CommitRecord, HistoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        // every exit below leaves `current_commit_oid` empty unless a parent follows
        let commit_oid = self.current_commit_oid.take()?;

        if !self.visited.insert(commit_oid.clone()) {
            return Some(Err(HistoryError::CycleDetected { oid: commit_oid }));
        }

        let commit = match self.store.load_commit(&commit_oid) {
            Ok(commit) => commit,
            Err(error) if error.is_not_found() => {
                tracing::debug!(oid = %commit_oid, "object missing, end of history");
                self.visited.remove(&commit_oid);
                return None;
            }
            Err(error) => {
                return Some(Err(HistoryError::BrokenChain {
                    oid: commit_oid,
                    source: Box::new(error),
                }));
            }
        };

        self.loaded += 1;
        if let Some(limit) = self.max_commits
            && self.loaded > limit
        {
            return Some(Err(HistoryError::HistoryTooLong { limit }));
        }

        self.current_commit_oid = commit.parent().cloned();
        Some(Ok(commit))
    }
}
