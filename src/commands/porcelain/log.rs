use crate::areas::repository::Repository;
use crate::artifacts::log::commit_chain::CommitChain;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::CommitRecord;
use crate::errors::HistoryError;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;

/// Where a history walk starts and which commits it keeps
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Starting revision; HEAD when absent
    pub revision: Option<String>,
    /// Inclusive lower bound on committer time
    pub since: DateTime<Utc>,
    pub max_commits: Option<usize>,
}

impl Repository {
    /// Resolve the starting revision and walk its first-parent history
    pub fn history(&self, opts: &HistoryOptions) -> Result<CommitChain, HistoryError> {
        let start_oid = match &opts.revision {
            Some(revision) => self.refs().resolve(revision)?,
            None => self.refs().read_head()?,
        };
        tracing::debug!(start = %start_oid, "walking history");

        let chain = RevList::new(self.database(), start_oid)
            .with_max_commits(opts.max_commits)
            .since(opts.since)?;

        if chain.is_empty() {
            tracing::warn!(since = %opts.since, "no commits found at or after the start date");
        }

        Ok(chain)
    }

    /// Print the chain oldest first, one commit per line
    ///
    /// Each line holds the position, the abbreviated hash, the committer time
    /// and the abbreviated parent hash (`-` for a root commit).
    pub fn log(&self, opts: &HistoryOptions) -> anyhow::Result<()> {
        let chain = self.history(opts)?;

        for (index, commit) in chain.iter().enumerate() {
            self.show_commit_line(index + 1, commit)?;
        }

        Ok(())
    }

    fn show_commit_line(&self, position: usize, commit: &CommitRecord) -> anyhow::Result<()> {
        let parent = commit
            .parent()
            .map(|parent| parent.to_short_oid())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            self.writer(),
            "{position} {} {} {parent}",
            commit.oid().to_short_oid().yellow(),
            commit
                .committed_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;

        Ok(())
    }
}
