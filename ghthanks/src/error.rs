use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThanksError {
    #[error("GitHub API error: {0}")]
    GitHubApi(Box<octocrab::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid repository format '{input}'. Expected format: owner/repo (e.g., meltano/meltano)")]
    InvalidRepo { input: String },

    #[error("No GitHub remote found in `git remote -v` output. Set GITHUB_REPOSITORY or add a github.com remote")]
    RepositoryNotFound,

    #[error("`git remote -v` exited with {status}: {stderr}")]
    GitCommand { status: String, stderr: String },

    #[error("Repository {repo} is not owned by an organization")]
    MissingOrganization { repo: String },

    #[error("Co-authored-by trailer without an email address: {line}")]
    MalformedTrailer { line: String },

    #[error("Not implemented: {feature}")]
    NotImplemented { feature: &'static str },
}

pub type Result<T> = std::result::Result<T, ThanksError>;

impl From<octocrab::Error> for ThanksError {
    fn from(err: octocrab::Error) -> Self {
        ThanksError::GitHubApi(Box::new(err))
    }
}
