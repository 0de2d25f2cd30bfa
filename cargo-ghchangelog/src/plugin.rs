use crate::error::Result;
use crate::hooks;
use crate::rules::{CommitRules, ParsedMessage};
use ghthanks::{GitCommit, RepoName, Thanker};

/// Everything the changelog generator needs from this crate
pub struct Customization {
    rules: CommitRules,
    repo: RepoName,
    thanker: Option<Thanker>,
}

/// A commit rewritten for the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub rev: String,
    pub parsed: ParsedMessage,
}

impl ChangelogEntry {
    pub fn heading(&self) -> &'static str {
        self.parsed.change_type.heading()
    }
}

impl Customization {
    pub fn new(rules: CommitRules, repo: RepoName, thanker: Option<Thanker>) -> Self {
        Self {
            rules,
            repo,
            thanker,
        }
    }

    /// Registration entry point: default rules, thanks enabled when `thank` is set
    pub async fn discover(
        repo: RepoName,
        api_url: &str,
        token: Option<String>,
        thank: bool,
    ) -> Result<Self> {
        let thanker = if thank {
            Some(Thanker::new(repo.clone(), api_url, token).await?)
        } else {
            tracing::info!("Contributor thanks disabled");
            None
        };

        Ok(Self::new(CommitRules::default(), repo, thanker))
    }

    pub fn rules(&self) -> &CommitRules {
        &self.rules
    }

    pub fn repo(&self) -> &RepoName {
        &self.repo
    }

    pub fn thanker(&self) -> Option<&Thanker> {
        self.thanker.as_ref()
    }

    /// Thanks suffix for a commit, empty when thanks are disabled
    pub async fn thanks_message(&self, commit: &GitCommit) -> Result<String> {
        match &self.thanker {
            Some(thanker) => Ok(thanker.thanks_message(commit).await?),
            None => Ok(String::new()),
        }
    }

    pub async fn changelog_message_builder_hook(
        &self,
        parsed_message: ParsedMessage,
        commit: &mut GitCommit,
    ) -> Result<ParsedMessage> {
        let thanks = self.thanks_message(commit).await?;
        Ok(hooks::changelog_message_builder_hook(
            parsed_message,
            commit,
            &self.repo,
            &thanks,
        ))
    }

    pub fn changelog_hook(&self, full_changelog: &str, partial_changelog: Option<&str>) -> String {
        hooks::changelog_hook(full_changelog, partial_changelog)
    }

    /// Parse a commit subject and run the message hook, `None` for non-changelog commits
    pub async fn build_entry(&self, commit: &mut GitCommit) -> Result<Option<ChangelogEntry>> {
        let Some(parsed) = self.rules.parse(&commit.title) else {
            tracing::debug!("Skipping {}: '{}' is not a changelog entry", commit.rev, commit.title);
            return Ok(None);
        };

        let parsed = self.changelog_message_builder_hook(parsed, commit).await?;
        Ok(Some(ChangelogEntry {
            rev: commit.rev.clone(),
            parsed,
        }))
    }
}
