use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskflowError {
    #[error("please fill in all required fields")]
    MissingRequiredFields,

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("sign in to access the ticketing system")]
    NotSignedIn,

    #[error("failed to submit ticket, please try again")]
    SubmissionFailed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeskflowError>;
