use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("genre not allowed: {0}")]
    GenreNotAllowed(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
