#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Rejected locally before anything is sent.
    #[error("{0}")]
    Validation(String),

    /// The relay could not be reached or refused the submission.
    #[error("{0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validation(crate::form::first_message(&value))
    }
}
