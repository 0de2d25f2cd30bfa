use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::git;
use crate::plugin::Customization;

pub struct Runner {
    args: Args,
    command: Command,
    repo_path: PathBuf,
}

impl Runner {
    pub fn new(mut args: Args, command: Command) -> Result<Self> {
        let config_path = if args.config.exists() {
            args.config.clone()
        } else {
            Config::default_path()
        };

        let config = Config::load(&config_path).context("Failed to load configuration")?;
        config.merge_with_args(&mut args);

        Ok(Self {
            args,
            command,
            repo_path: PathBuf::from("."),
        })
    }

    /// Read local commits from another checkout instead of the current directory
    pub fn with_repo_path(mut self, repo_path: impl Into<PathBuf>) -> Self {
        self.repo_path = repo_path.into();
        self
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub async fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out).await
    }

    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let repo = self
            .args
            .repo_name()
            .context("Failed to resolve the GitHub repository")?;
        tracing::info!("Using repository {}", repo);

        match &self.command {
            Command::Repo => {
                writeln!(out, "{repo}")?;
            }
            Command::Thanks { revs } => {
                let plugin = self.customization(repo, true).await?;
                for rev in revs {
                    let commit = git::read_commit(&self.repo_path, rev)
                        .with_context(|| format!("Failed to read commit {rev}"))?;
                    let thanks = plugin.thanks_message(&commit).await?;
                    writeln!(out, "{}\t{}", commit.rev, thanks)?;
                }
            }
            Command::Entry { revs } => {
                let plugin = self.customization(repo, !self.args.no_thanks).await?;
                for rev in revs {
                    let mut commit = git::read_commit(&self.repo_path, rev)
                        .with_context(|| format!("Failed to read commit {rev}"))?;
                    if let Some(entry) = plugin.build_entry(&mut commit).await? {
                        let increment = entry
                            .parsed
                            .increment()
                            .map(|increment| increment.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        writeln!(
                            out,
                            "{}\t{}\t{}",
                            entry.heading(),
                            increment,
                            entry.parsed.message
                        )?;
                    }
                }
            }
        }

        Ok(())
    }

    async fn customization(
        &self,
        repo: ghthanks::RepoName,
        thank: bool,
    ) -> Result<Customization> {
        Customization::discover(repo, &self.args.api_url, self.args.github_token(), thank)
            .await
            .context("Failed to set up the changelog customization")
    }
}
