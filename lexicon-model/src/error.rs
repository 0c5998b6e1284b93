use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidLetter(String),
    InvalidPageSize(usize),
    InvalidEntry(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidLetter(raw) => {
                write!(f, "invalid filter letter: {raw:?}")
            }
            ModelError::InvalidPageSize(size) => {
                write!(f, "invalid page size: {size}")
            }
            ModelError::InvalidEntry(msg) => write!(f, "invalid entry: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
