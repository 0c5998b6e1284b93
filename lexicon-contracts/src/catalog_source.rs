use lexicon_model::{EntryId, VocabularyEntry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("unsupported catalog format: {0}")]
    Format(String),
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),
}

/// Static, ordered catalog loaded once before the first filter call.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<VocabularyEntry>, CatalogError>;
}
