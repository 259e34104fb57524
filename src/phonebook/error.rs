use crate::model::DuplicateContact;
use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Invalid contact: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Duplicate(DuplicateContact),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
