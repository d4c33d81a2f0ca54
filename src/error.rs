use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ViewError {
    /// Whether this error means the input table itself is malformed
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            ViewError::MissingColumn(_) | ViewError::InvalidValue { .. } | ViewError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
