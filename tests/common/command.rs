use crate::common::repository::FixtureRepository;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// 2022-12-31 12:00:00 UTC
pub const BEFORE_NEW_YEAR: i64 = 1672488000;
/// 2023-01-01 00:00:00 UTC
pub const NEW_YEAR: i64 = 1672531200;
/// 2023-01-02 00:00:00 UTC
pub const AFTER_NEW_YEAR: i64 = 1672617600;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn empty_repository(repository_dir: TempDir) -> FixtureRepository {
    FixtureRepository::init(repository_dir)
}

/// C1 -> C2 -> C3 on `main`, with C2 committed exactly at midnight on 2023-01-01
#[fixture]
pub fn three_commit_repository(repository_dir: TempDir) -> (FixtureRepository, Vec<String>) {
    let repository = FixtureRepository::init(repository_dir);

    let commits = vec![
        repository.commit(BEFORE_NEW_YEAR, "First commit"),
        repository.commit(NEW_YEAR, "Second commit"),
        repository.commit(AFTER_NEW_YEAR, "Third commit"),
    ];

    (repository, commits)
}

pub fn run_commit_graph_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("commit-graph").expect("Failed to find commit-graph binary");
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Short hashes printed by `log`, in output order
pub fn logged_short_oids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}

pub fn short(oid: &str) -> String {
    oid[..7].to_string()
}
