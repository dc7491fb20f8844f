use thiserror::Error;

#[derive(Error, Debug)]
pub enum MomentumError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    /// Half column outside 1/2. Rows are 1-based and include the header.
    #[error("Invalid half '{value}' at row {row} (expected 1 or 2)")]
    InvalidHalf { value: String, row: usize },
}

pub type MmResult<T> = Result<T, MomentumError>;
