use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashMap, HashSet};

/// Commits kept by a history walk, oldest first
///
/// Besides the filtered commits, the chain remembers every commit the walk
/// passed through, so callers can tell a parent that was filtered out from one
/// that was never reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitChain {
    commits: Vec<CommitRecord>,
    positions: HashMap<ObjectId, usize>,
    traversed: HashSet<ObjectId>,
}

impl CommitChain {
    /// Build a chain from commits in discovery order
    ///
    /// Commits are sorted by committer time; the sort is stable, so commits
    /// with equal timestamps keep their discovery order.
    pub fn new(mut commits: Vec<CommitRecord>, traversed: HashSet<ObjectId>) -> Self {
        commits.sort_by_key(|commit| commit.committed_at());

        let positions = commits
            .iter()
            .enumerate()
            .map(|(index, commit)| (commit.oid().clone(), index + 1))
            .collect();

        CommitChain {
            commits,
            positions,
            traversed,
        }
    }

    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommitRecord> {
        self.commits.iter()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// 1-based position of a commit in the chain
    pub fn position(&self, oid: &ObjectId) -> Option<usize> {
        self.positions.get(oid).copied()
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.positions.contains_key(oid)
    }

    /// Whether the walk visited this commit, kept or not
    pub fn was_traversed(&self, oid: &ObjectId) -> bool {
        self.traversed.contains(oid)
    }

    pub fn traversed_count(&self) -> usize {
        self.traversed.len()
    }
}

impl<'c> IntoIterator for &'c CommitChain {
    type Item = &'c CommitRecord;
    type IntoIter = std::slice::Iter<'c, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.iter()
    }
}
