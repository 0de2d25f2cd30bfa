use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error(transparent)]
    Thanks(#[from] ghthanks::error::ThanksError),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error at {path}: {message}")]
    Config { path: String, message: String },

    #[error("Commit '{rev}' has no subject line")]
    EmptySubject { rev: String },
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
