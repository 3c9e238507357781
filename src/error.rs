use crate::models::CardId;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card id: {0}")]
    DuplicateId(CardId),

    #[error("card not found: {0}")]
    NotFound(CardId),

    #[error("load failed: {0}")]
    Load(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
