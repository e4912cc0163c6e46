use polars::error::PolarsError;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV export")]
    CsvWrite(#[source] PolarsError),

    #[error("CSV export is not valid UTF-8")]
    CsvEncoding(#[from] FromUtf8Error),

    #[error("Failed to encode or decode JSON export")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported export format version '{found}', expected '{expected}'")]
    UnsupportedFormatVersion { found: String, expected: &'static str },
}
