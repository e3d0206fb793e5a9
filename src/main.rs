use anyhow::Result;
use clap::{Parser, Subcommand};
use commit_graph::areas::repository::Repository;
use commit_graph::commands::porcelain::graph::GraphOptions;
use commit_graph::commands::porcelain::log::HistoryOptions;
use commit_graph::config::{Config, ConfigOverrides};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "commit-graph",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Draw the commit history of a git repository",
    long_about = "Reads the commit history of a git repository straight from its object store, \
    without running git, keeps the commits made since a given date and draws them as a graph.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        help = "JSON config file (defaults to config.json when present)"
    )]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Log walked commits")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "graph",
        about = "Render the commit history as a graph",
        long_about = "This command walks the first-parent history from HEAD (or the given revision), \
        keeps the commits made since the configured date and renders them with Graphviz. \
        A `.dot` output path writes the DOT source instead of an image."
    )]
    Graph {
        #[arg(index = 1, help = "The revision to start from (defaults to HEAD)")]
        revision: Option<String>,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
    #[command(
        name = "log",
        about = "List the commits that would be drawn",
        long_about = "This command prints the date-filtered history oldest first, \
        one commit per line: position, hash, committer time and parent."
    )]
    Log {
        #[arg(index = 1, help = "The revision to start from (defaults to HEAD)")]
        revision: Option<String>,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
    #[command(
        name = "cat-commit",
        about = "Print the parent and committer time of a commit object",
        long_about = "This command decodes a single commit object from the object store. \
        It requires the full SHA of the commit."
    )]
    CatCommit {
        #[arg(index = 1, help = "The commit SHA")]
        sha: String,
        #[arg(long = "repo", value_name = "PATH", help = "Repository root")]
        repo_path: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "commit_graph=debug"
    } else {
        "commit_graph=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository(config: &Config) -> Result<Repository> {
    Repository::new(&config.repo_path, Box::new(std::io::stdout()))
}

fn history_options(config: &Config, revision: Option<String>) -> HistoryOptions {
    HistoryOptions {
        revision,
        since: config.start_boundary(),
        max_commits: config.max_commits,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    colored::control::set_override(std::io::stdout().is_terminal());

    match cli.command {
        Commands::Graph {
            revision,
            overrides,
        } => {
            let config = Config::load(cli.config.as_deref(), overrides)?;
            let repository = open_repository(&config)?;

            repository.graph(&GraphOptions {
                history: history_options(&config, revision),
                output: config.output_path()?.to_path_buf(),
            })?
        }
        Commands::Log {
            revision,
            overrides,
        } => {
            let config = Config::load(cli.config.as_deref(), overrides)?;
            let repository = open_repository(&config)?;

            repository.log(&history_options(&config, revision))?
        }
        Commands::CatCommit { sha, repo_path } => {
            let repo_path = match repo_path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            let repository = Repository::new(&repo_path, Box::new(std::io::stdout()))?;

            repository.cat_commit(&sha)?
        }
    }

    Ok(())
}
