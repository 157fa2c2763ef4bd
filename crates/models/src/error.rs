use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown notification category: {0}")]
    UnknownCategory(String),
    #[error("Unknown action kind: {0}")]
    UnknownActionKind(String),
    #[error("Unknown display filter: {0}")]
    UnknownFilter(String),
    #[error("Validation: {0}")]
    Validation(String),
}
