//! # ghthanks
//!
//! Credit third-party contributors in a generated changelog.
//!
//! ## Overview
//!
//! `ghthanks` looks up who authored a commit on GitHub and, when that account
//! is neither a member of the repository's organization nor the dependabot
//! bot, produces a `-- _**Thanks @login!**_` suffix for the changelog entry.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run() -> ghthanks::error::Result<()> {
//! use ghthanks::{git, GitCommit, Thanker, DEFAULT_API_URL};
//!
//! let repo = git::repo_name()?;
//! let thanker = Thanker::from_env(repo, DEFAULT_API_URL).await?;
//! let commit = GitCommit::new("abc123", "feat: add a thing (#42)");
//! println!("{}", thanker.thanks_message(&commit).await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment
//!
//! - `GITHUB_REPOSITORY`: `owner/name` override, otherwise `git remote -v` is used
//! - `INPUT_GITHUB_TOKEN`, then `GITHUB_TOKEN`: API credential

/// Error types and error handling utilities
pub mod error;

/// Repository name resolution and the commit record
pub mod git;

/// Read-only GitHub API client
pub mod github;

/// Contributor attribution
pub mod thanks;

pub use git::{GitCommit, RepoName};
pub use github::DEFAULT_API_URL;
pub use thanks::{format_thanks, Thanker};
