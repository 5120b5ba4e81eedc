use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Source name '{0}' does not match the mesh500_NN_NN naming convention")]
    UnidentifiableSource(String),

    #[error("Source '{0}' contains no data")]
    EmptySource(String),

    #[error("No soundings match the requested bounds")]
    NoMatchingData,

    #[error("Bounds error: {0}")]
    InvalidBounds(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
