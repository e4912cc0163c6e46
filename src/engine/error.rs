use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    // Mean, median and percentiles have no value over zero observations
    #[error("Cannot compute statistics for '{variable}' over an empty series")]
    EmptySeries { variable: String },

    #[error("Unknown weather variable '{0}'")]
    UnknownVariable(String),

    #[error("Series contains {count} non-finite value(s) for '{variable}'")]
    NonFiniteValues { variable: String, count: usize },

    #[error("A distribution needs at least one bin")]
    ZeroBins,
}
