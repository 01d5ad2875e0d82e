//! Error types for dataset preprocessing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Column {column} has no observed values to impute from")]
    Imputation { column: usize },

    #[error("Unknown category {value:?} in column {column}")]
    UnknownCategory { column: usize, value: String },

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
