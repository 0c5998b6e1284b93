use lexicon_contracts::{CatalogError, StorageError, StoreError};
use lexicon_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Invalid input: {0}")]
    Model(#[from] ModelError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Favorite store error: {0}")]
    Store(#[from] StoreError),

    #[error("Preference storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
