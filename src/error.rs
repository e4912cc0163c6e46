use crate::engine::error::StatisticsError;
use crate::export::error::ExportError;
use crate::provider::error::ProviderError;
use crate::types::threshold::ThresholdError;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherOddsError {
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    #[error(transparent)]
    Statistics(#[from] StatisticsError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Failed to serialize query")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not resolve date")]
    DateParsingError,

    #[error("Date range starts at {start}, after its end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
