use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
    #[error("storage serialization failed: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable local key/value storage, the equivalent of a browser's
/// `localStorage`. Values are plain strings.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
