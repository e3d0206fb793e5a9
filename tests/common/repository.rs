use assert_fs::TempDir;
use derive_new::new;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Hash of the empty tree, used as the tree of every fixture commit
pub const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

#[derive(Debug, Clone, new)]
pub struct FixtureAuthor {
    pub name: String,
    pub email: String,
}

pub fn generate_random_author() -> FixtureAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    // names keep their spaces: the committer time is found from the right
    FixtureAuthor::new(Name().fake::<String>(), FreeEmail().fake::<String>())
}

/// A git directory written by hand, one loose object at a time
pub struct FixtureRepository {
    dir: TempDir,
    git_dir: PathBuf,
}

impl FixtureRepository {
    /// Work tree layout: objects live under `<dir>/.git`
    pub fn init(dir: TempDir) -> Self {
        let git_dir = dir.path().join(".git");
        Self::init_git_dir(dir, git_dir)
    }

    /// Bare layout: `<dir>` is the git directory
    pub fn init_bare(dir: TempDir) -> Self {
        let git_dir = dir.path().to_path_buf();
        Self::init_git_dir(dir, git_dir)
    }

    fn init_git_dir(dir: TempDir, git_dir: PathBuf) -> Self {
        std::fs::create_dir_all(git_dir.join("objects")).expect("Failed to create objects dir");
        std::fs::create_dir_all(git_dir.join("refs").join("heads"))
            .expect("Failed to create refs dir");
        std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n")
            .expect("Failed to write HEAD");

        let repository = FixtureRepository { dir, git_dir };
        let empty_tree = repository.write_object("tree", b"");
        assert_eq!(empty_tree, EMPTY_TREE_OID);

        repository
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn object_path(&self, oid: &str) -> PathBuf {
        self.git_dir.join("objects").join(&oid[..2]).join(&oid[2..])
    }

    /// Store `<kind> <len>\0<content>` zlib-compressed under its SHA-1
    pub fn write_object(&self, kind: &str, content: &[u8]) -> String {
        let mut object = format!("{kind} {}\0", content.len()).into_bytes();
        object.extend_from_slice(content);

        let mut hasher = Sha1::new();
        hasher.update(&object);
        let oid = format!("{:x}", hasher.finalize());

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&object).expect("Failed to compress object");
        let compressed = encoder.finish().expect("Failed to compress object");

        self.write_raw_object(&oid, &compressed);
        oid
    }

    /// Overwrite an object file with arbitrary bytes
    pub fn write_raw_object(&self, oid: &str, bytes: &[u8]) {
        let object_path = self.object_path(oid);
        std::fs::create_dir_all(object_path.parent().expect("object path has a parent"))
            .expect("Failed to create object dir");
        std::fs::write(&object_path, bytes).expect("Failed to write object");
    }

    /// Write a commit with the given parents and committer time, leaving refs alone
    pub fn write_commit(&self, parents: &[&str], timestamp: i64, message: &str) -> String {
        let author = generate_random_author();
        let mut lines = vec![format!("tree {EMPTY_TREE_OID}")];
        lines.extend(parents.iter().map(|parent| format!("parent {parent}")));
        lines.push(format!(
            "author {} <{}> {timestamp} +0000",
            author.name, author.email
        ));
        lines.push(format!(
            "committer {} <{}> {timestamp} +0000",
            author.name, author.email
        ));
        lines.push(String::new());
        lines.push(message.to_string());
        lines.push(String::new());

        self.write_object("commit", lines.join("\n").as_bytes())
    }

    /// Write a commit on top of the current branch and advance it
    pub fn commit(&self, timestamp: i64, message: &str) -> String {
        let parent = self.branch_oid("main");
        let parents = parent.iter().map(String::as_str).collect::<Vec<_>>();

        let oid = self.write_commit(&parents, timestamp, message);
        self.set_branch("main", &oid);
        oid
    }

    pub fn branch_oid(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.git_dir.join("refs").join("heads").join(name))
            .ok()
            .map(|content| content.trim().to_string())
    }

    pub fn set_branch(&self, name: &str, oid: &str) {
        std::fs::write(
            self.git_dir.join("refs").join("heads").join(name),
            format!("{oid}\n"),
        )
        .expect("Failed to write branch");
    }

    pub fn detach_head(&self, oid: &str) {
        std::fs::write(self.git_dir.join("HEAD"), format!("{oid}\n")).expect("Failed to write HEAD");
    }
}
