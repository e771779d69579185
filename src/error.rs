use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError{
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector{ selector: String, reason: String },
    #[error("invalid page name `{0}`")]
    InvalidName(String),
    #[error("page `{0}` not found")]
    NotFound(String),
    #[error("failed to read page: {0}")]
    Io(#[from] std::io::Error),
}
