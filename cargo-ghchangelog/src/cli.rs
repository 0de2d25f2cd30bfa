use clap::{Parser, Subcommand};
use ghthanks::{git, RepoName, DEFAULT_API_URL};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "cargo-ghchangelog",
    version,
    about = "Changelog entries with issue links and contributor thanks",
    long_about = None,
    bin_name = "cargo"
)]
pub enum CargoCli {
    #[clap(name = "ghchangelog")]
    Ghchangelog(GhchangelogCli),
}

#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct GhchangelogCli {
    #[clap(subcommand)]
    pub command: Command,

    #[clap(flatten)]
    pub args: Args,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the resolved owner/name of the repository
    Repo,

    /// Print the thanks suffix for each commit
    Thanks {
        /// Commits to look up (any git revision)
        #[clap(value_name = "REV", required = true)]
        revs: Vec<String>,
    },

    /// Print the rewritten changelog entry for each commit
    Entry {
        /// Commits to rewrite (any git revision)
        #[clap(value_name = "REV", required = true)]
        revs: Vec<String>,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// GitHub repository (owner/repo)
    /// If not specified, uses GITHUB_REPOSITORY or the github.com git remote
    #[clap(long, global = true)]
    pub repository: Option<String>,

    /// GitHub API base URL
    #[clap(long, default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// GitHub token (falls back to INPUT_GITHUB_TOKEN, then GITHUB_TOKEN)
    #[clap(long, global = true)]
    pub github_token: Option<String>,

    /// Don't look up contributors to thank
    #[clap(long, global = true)]
    pub no_thanks: bool,

    /// Configuration file path
    #[clap(long, default_value = ".config/ghchangelog.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,
}

impl Args {
    /// Repository from the flag or config, then `GITHUB_REPOSITORY`, then git remotes
    pub fn repo_name(&self) -> ghthanks::error::Result<RepoName> {
        match &self.repository {
            Some(repo) => repo.parse(),
            None => git::repo_name(),
        }
    }

    /// Token from the flag, then the environment
    pub fn github_token(&self) -> Option<String> {
        self.github_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(ghthanks::thanks::github_token_from_env)
    }
}
