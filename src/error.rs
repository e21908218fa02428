use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Database error: {0}")]
    Database(String),
    
    #[error("Mapping error: {0}")]
    Mapping(String),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<sqlx::Error> for ContentError {
    fn from(err: sqlx::Error) -> Self {
        ContentError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
