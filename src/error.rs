use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid category catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unrecognized range token '{0}': expected 'all' or a day count")]
    UnknownRangeToken(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
