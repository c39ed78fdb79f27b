#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read review collection: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize review collection: {0}")]
    Deserialization(serde_json::Error),
    #[error("no review with id {0}")]
    UnknownReview(u32),
}

pub type ReviewResult<T> = std::result::Result<T, ReviewError>;
