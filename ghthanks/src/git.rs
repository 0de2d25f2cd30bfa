use crate::error::{Result, ThanksError};
use std::fmt;
use std::process::Command;
use std::str::FromStr;

/// Environment variable holding an explicit `owner/name` override
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

const GITHUB_HOST: &str = "github.com";

/// A hosted repository identified as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName {
    pub owner: String,
    pub name: String,
}

impl RepoName {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoName {
    type Err = ThanksError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ThanksError::InvalidRepo {
            input: s.to_string(),
        };

        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A commit as handed over by the changelog generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommit {
    pub rev: String,
    pub title: String,
    pub body: String,
}

impl GitCommit {
    pub fn new(rev: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            rev: rev.into(),
            title: title.into(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Resolve the repository from `GITHUB_REPOSITORY`, falling back to `git remote -v`
pub fn repo_name() -> Result<RepoName> {
    let from_env = std::env::var(REPOSITORY_ENV).ok();
    resolve_repo_name(from_env.as_deref())
}

/// Resolve the repository, preferring an explicit override when it is non-empty
pub fn resolve_repo_name(override_value: Option<&str>) -> Result<RepoName> {
    match override_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => {
            tracing::debug!("Using repository override: {}", value);
            value.parse()
        }
        None => repo_name_from_git_remote(),
    }
}

/// Derive the repository from the remotes configured in the current directory
pub fn repo_name_from_git_remote() -> Result<RepoName> {
    let output = Command::new("git").args(["remote", "-v"]).output()?;

    if !output.status.success() {
        return Err(ThanksError::GitCommand {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    let repo = parse_remote_listing(&listing).ok_or(ThanksError::RepositoryNotFound)?;
    tracing::debug!("Resolved repository {} from git remotes", repo);
    Ok(repo)
}

/// Find the first github.com remote in `git remote -v` output
pub fn parse_remote_listing(listing: &str) -> Option<RepoName> {
    listing
        .split_whitespace()
        .filter(|token| token.contains(GITHUB_HOST))
        .find_map(repo_name_from_url)
}

/// Extract `owner/name` from an SSH or HTTPS GitHub remote URL
pub fn repo_name_from_url(url: &str) -> Option<RepoName> {
    let (_, path) = url.split_once(GITHUB_HOST)?;
    // git@github.com:owner/name.git or https://github.com/owner/name.git
    let path = path.strip_prefix(':').or_else(|| path.strip_prefix('/'))?;
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    path.parse().ok()
}
