use crate::areas::database::ObjectStore;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Print the parent and committer time of a single commit object
    pub fn cat_commit(&self, object_id: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        let commit = self.database().load_commit(&object_id)?;

        writeln!(self.writer(), "commit {}", commit.oid())?;
        if let Some(parent) = commit.parent() {
            writeln!(self.writer(), "parent {parent}")?;
        }
        writeln!(
            self.writer(),
            "committer-time {} ({})",
            commit.committer_timestamp(),
            commit.committed_at().format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        Ok(())
    }
}
