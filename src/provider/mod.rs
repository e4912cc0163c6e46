//! Sources of historical daily observations.

pub mod error;
pub mod static_provider;
pub mod synthetic;

use crate::provider::error::ProviderError;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::series::HistoricalSeries;
use std::future::Future;

/// Supplies the daily observations an analysis is computed from.
///
/// Implementations return every day they hold for `location` that falls in
/// the calendar window of `date_range`, across all years of history, tagged
/// with a provenance string. The returned series carries `date_range` as its
/// nominal range.
pub trait HistoricalDataProvider {
    fn fetch_series(
        &self,
        location: &Location,
        date_range: &DateRange,
    ) -> impl Future<Output = Result<HistoricalSeries, ProviderError>> + Send;
}
