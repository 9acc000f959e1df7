use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Not a Git repository. Please run this command inside a Git repository.")]
    NotARepository,

    #[error("{field} is required in non-interactive mode (--{field})")]
    MissingField { field: &'static str },

    #[error("invalid commit type '{given}'. Valid types are: {valid}")]
    InvalidCommitType { given: String, valid: String },

    #[error("Failed to commit changes: {0}")]
    CommitFailed(String),

    #[error("Failed to push changes: {0}")]
    PushFailed(String),

    #[error("State file error: {0}")]
    StateError(String),
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::StateError(error.to_string())
    }
}
