use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No historical data for '{location}' between {start} and {end}")]
    NotFound {
        location: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Cannot look back {years} years from {today}")]
    HistoryTooLong { years: u32, today: NaiveDate },

    #[error("Cannot project {month:02}-{day:02} onto year {year}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
