//! Run configuration
//!
//! Settings come from a JSON file:
//!
//! ```json
//! {
//!     "repo_path": "/path/to/repo",
//!     "output_image_path": "graph.png",
//!     "commit_date": "2024-01-01",
//!     "max_commits": 10000
//! }
//! ```
//!
//! Any value may be overridden on the command line. `commit_date` is read as
//! midnight UTC and is an inclusive lower bound.

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo_path: PathBuf,
    /// Only needed when rendering
    pub output_image_path: Option<PathBuf>,
    pub commit_date: NaiveDate,
    pub max_commits: Option<usize>,
}

/// Settings that may be left unset, from a config file or from CLI flags
///
/// Keys other than these are ignored, so a config file may carry settings for
/// other tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, clap::Args)]
pub struct ConfigOverrides {
    /// Repository root (work tree or git directory)
    #[arg(long = "repo", value_name = "PATH")]
    pub repo_path: Option<PathBuf>,

    /// Output file; the extension selects the format (png, svg, dot, ...)
    #[arg(long = "output", value_name = "PATH")]
    pub output_image_path: Option<PathBuf>,

    /// Keep commits made on or after this day (YYYY-MM-DD, UTC)
    #[arg(long = "since", value_name = "DATE")]
    pub commit_date: Option<NaiveDate>,

    /// Abort when the history is longer than this many commits
    #[arg(long = "max-commits", value_name = "N")]
    pub max_commits: Option<usize>,
}

impl ConfigOverrides {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Values set in `self` win over values in `base`
    pub fn over(self, base: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            repo_path: self.repo_path.or(base.repo_path),
            output_image_path: self.output_image_path.or(base.output_image_path),
            commit_date: self.commit_date.or(base.commit_date),
            max_commits: self.max_commits.or(base.max_commits),
        }
    }
}

impl Config {
    /// Load settings from `path` and apply `overrides` on top
    ///
    /// With no explicit path, [`DEFAULT_CONFIG_PATH`] is read if it exists;
    /// an explicit path must exist.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<Self> {
        let from_file = match path {
            Some(path) => ConfigOverrides::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                ConfigOverrides::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => {
                tracing::debug!("no {DEFAULT_CONFIG_PATH} found, using command line settings");
                ConfigOverrides::default()
            }
        };

        Config::try_from(overrides.over(from_file))
    }

    pub fn output_path(&self) -> anyhow::Result<&Path> {
        self.output_image_path
            .as_deref()
            .context("Missing setting: output_image_path")
    }

    /// Start of `commit_date` in UTC
    pub fn start_boundary(&self) -> DateTime<Utc> {
        self.commit_date.and_time(NaiveTime::MIN).and_utc()
    }
}

impl TryFrom<ConfigOverrides> for Config {
    type Error = anyhow::Error;

    fn try_from(value: ConfigOverrides) -> anyhow::Result<Self> {
        Ok(Config {
            repo_path: value.repo_path.context("Missing setting: repo_path")?,
            output_image_path: value.output_image_path,
            commit_date: value.commit_date.context("Missing setting: commit_date")?,
            max_commits: value.max_commits,
        })
    }
}
