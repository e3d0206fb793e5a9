use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the git directory inside a work tree
pub const GIT_DIR_NAME: &str = ".git";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository at `path`
    ///
    /// `path` may be a work tree containing `.git`, or a git directory itself
    /// (a bare repository).
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Repository path {} does not exist", path.display()))?;

        let git_dir = if path.join(GIT_DIR_NAME).is_dir() {
            path.join(GIT_DIR_NAME)
        } else {
            path.clone()
        };

        if !git_dir.join("objects").is_dir() {
            anyhow::bail!(
                "Not a git repository (no objects directory): {}",
                path.display()
            );
        }

        tracing::debug!(git_dir = %git_dir.display(), "opened repository");

        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
