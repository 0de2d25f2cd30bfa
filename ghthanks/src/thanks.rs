//! Highlight third-party contributions in the changelog.

use crate::error::{Result, ThanksError};
use crate::git::{GitCommit, RepoName};
use crate::github::{GitHubClient, Organization, RepositoryInfo};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Token variables in order of precedence
pub const TOKEN_ENV_VARS: [&str; 2] = ["INPUT_GITHUB_TOKEN", "GITHUB_TOKEN"];

/// Automation account that never gets thanked
pub const EXCLUDED_BOT_LOGIN: &str = "dependabot[bot]";

const CO_AUTHOR_TRAILER: &str = "Co-authored-by: ";

static CO_AUTHOR_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.*)>$").expect("co-author pattern is valid"));

/// Read the GitHub token, `INPUT_GITHUB_TOKEN` first
pub fn github_token_from_env() -> Option<String> {
    first_token(TOKEN_ENV_VARS.iter().map(|var| std::env::var(var).ok()))
}

fn first_token(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|token| !token.trim().is_empty())
}

/// Render the thanks suffix for a changelog entry
///
/// Returns an empty string when there is nobody to thank.
pub fn format_thanks<S: AsRef<str>>(logins: &[S]) -> String {
    let handles: Vec<String> = logins
        .iter()
        .map(|login| format!("@{}", login.as_ref()))
        .collect();

    let names = match handles.as_slice() {
        [] => return String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    };

    format!(" -- _**Thanks {names}!**_")
}

/// Decides who to thank for a commit
///
/// Organization membership is fetched once when the thanker is built and is
/// never refreshed afterwards.
pub struct Thanker {
    client: GitHubClient,
    repo_name: RepoName,
    repo: RepositoryInfo,
    org: Organization,
    org_members: HashSet<String>,
}

impl Thanker {
    /// Build a thanker using the token found in the environment
    pub async fn from_env(repo_name: RepoName, base_url: &str) -> Result<Self> {
        Self::new(repo_name, base_url, github_token_from_env()).await
    }

    pub async fn new(repo_name: RepoName, base_url: &str, token: Option<String>) -> Result<Self> {
        if token.is_none() {
            tracing::warn!(
                "No GitHub token provided - changelog may include thanks for first-party contributors"
            );
        }

        let client = GitHubClient::new(base_url, token)?;
        let repo = client.get_repo(&repo_name).await?;

        // The organization embedded in the repository payload carries a stale
        // URL, so fetch it again by login.
        let org_login = repo
            .organization
            .as_ref()
            .map(|org| org.login.clone())
            .ok_or_else(|| ThanksError::MissingOrganization {
                repo: repo_name.to_string(),
            })?;
        let org = client.get_organization(&org_login).await?;

        let org_members: HashSet<String> = client
            .list_members(&org.login)
            .await?
            .into_iter()
            .map(|member| member.login)
            .collect();

        tracing::info!(
            "Loaded {} members of {} for {}",
            org_members.len(),
            org.login,
            repo_name
        );

        Ok(Self {
            client,
            repo_name,
            repo,
            org,
            org_members,
        })
    }

    pub fn repo_name(&self) -> &RepoName {
        &self.repo_name
    }

    pub fn repository(&self) -> &RepositoryInfo {
        &self.repo
    }

    pub fn organization(&self) -> &Organization {
        &self.org
    }

    pub fn members(&self) -> &HashSet<String> {
        &self.org_members
    }

    /// Whether a login is a member or the excluded bot
    pub fn is_excluded(&self, login: &str) -> bool {
        self.org_members.contains(login) || login == EXCLUDED_BOT_LOGIN
    }

    pub async fn thanks_message(&self, commit: &GitCommit) -> Result<String> {
        let logins = self.third_party_contributors(commit).await?;
        Ok(format_thanks(&logins))
    }

    pub async fn third_party_contributors(&self, commit: &GitCommit) -> Result<Vec<String>> {
        Ok(self
            .contributors(commit)
            .await?
            .into_iter()
            .filter(|login| !self.is_excluded(login))
            .collect())
    }

    /// Everyone credited on a commit, author first
    pub async fn contributors(&self, commit: &GitCommit) -> Result<Vec<String>> {
        let github_commit = self.client.get_commit(&self.repo_name, &commit.rev).await?;

        let mut contributors = Vec::new();
        match github_commit.author {
            Some(author) => contributors.push(author.login),
            None => tracing::debug!("Commit {} is not linked to a GitHub account", commit.rev),
        }
        // TODO: append `self.co_authors(&github_commit.commit.message)?` once
        // `email_to_login` can map an email address to a GitHub login.

        Ok(contributors)
    }

    /// Logins for every distinct `Co-authored-by:` trailer in a commit message
    pub fn co_authors(&self, commit_message: &str) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut logins = Vec::new();

        for line in commit_message
            .lines()
            .filter(|line| line.starts_with(CO_AUTHOR_TRAILER))
        {
            if !seen.insert(line) {
                continue;
            }
            let email = CO_AUTHOR_EMAIL
                .captures(line)
                .and_then(|caps| caps.get(1))
                .ok_or_else(|| ThanksError::MalformedTrailer {
                    line: line.to_string(),
                })?;
            logins.push(self.email_to_login(email.as_str())?);
        }

        Ok(logins)
    }

    /// Map a commit email address to a GitHub login
    ///
    /// The user search API misses many accounts even when searching by their
    /// public primary email, so no lookup strategy is in place yet and this
    /// always fails.
    pub fn email_to_login(&self, email: &str) -> Result<String> {
        tracing::debug!("Cannot resolve a GitHub login for {}", email);
        Err(ThanksError::NotImplemented {
            feature: "email to GitHub login resolution",
        })
    }
}
