use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("feed parse error: {0}")]
    FeedParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
