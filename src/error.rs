use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Page context error: {0}")]
    ContextError(#[from] serde_json::Error),
    #[error("Backend response error: {0}")]
    BackendError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
