use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,

    #[error("state store unavailable: {0}")]
    Unavailable(String),
}
