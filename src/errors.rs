use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: expected 6 fields, found {found}")]
    Parse { line: usize, found: usize },

    #[error("Record index {index} is out of range (phone book holds {len} records)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Unknown field id {0}, expected a number from 1 to 6")]
    UnknownField(i64),

    #[error("Page size must be a positive integer, got {0}")]
    InvalidPageSize(i64),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    /// Index, field id and page size violations.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            AppError::IndexOutOfRange { .. }
                | AppError::UnknownField(_)
                | AppError::InvalidPageSize(_)
        )
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(err: tempfile::PersistError) -> Self {
        AppError::Io(err.error)
    }
}
