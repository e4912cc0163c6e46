use crate::provider::error::ProviderError;
use crate::provider::HistoricalDataProvider;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::observation::Observation;
use crate::types::series::HistoricalSeries;
use log::debug;

/// Serves previously recorded series, e.g. replayed from an export or built in tests.
///
/// A request is answered from the first archived series for the same place
/// (see [`Location::same_place`]). Its observations are narrowed to the calendar window
/// of the requested range, keeping every year.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    archive: Vec<HistoricalSeries>,
}

impl StaticProvider {
    pub fn new(archive: Vec<HistoricalSeries>) -> Self {
        Self { archive }
    }

    pub fn push(&mut self, series: HistoricalSeries) {
        self.archive.push(series);
    }

    /// Synchronous form of [`HistoricalDataProvider::fetch_series`].
    pub fn lookup(
        &self,
        location: &Location,
        date_range: &DateRange,
    ) -> Result<HistoricalSeries, ProviderError> {
        let stored = self
            .archive
            .iter()
            .find(|series| series.location().same_place(location))
            .ok_or_else(|| ProviderError::NotFound {
                location: location.name.clone(),
                start: date_range.start(),
                end: date_range.end(),
            })?;

        let mut data: Vec<Observation> = stored
            .observations()
            .iter()
            .filter(|o| date_range.covers_calendar_day(o.date))
            .copied()
            .collect();
        data.sort_by_key(|o| o.date);
        debug!(
            "Serving {} of {} archived days for {}",
            data.len(),
            stored.len(),
            location.name
        );

        Ok(HistoricalSeries::new(
            location.clone(),
            *date_range,
            data,
            stored.source(),
        ))
    }
}

impl HistoricalDataProvider for StaticProvider {
    async fn fetch_series(
        &self,
        location: &Location,
        date_range: &DateRange,
    ) -> Result<HistoricalSeries, ProviderError> {
        self.lookup(location, date_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::LatLon;
    use chrono::{Duration, NaiveDate};

    fn london() -> Location {
        Location::new("London, UK", LatLon(51.5074, -0.1278))
    }

    fn archive() -> HistoricalSeries {
        let start = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let data = (0..60)
            .map(|i| Observation {
                date: start + Duration::days(i),
                temperature: 18.0,
                temperature_min: 12.0,
                temperature_max: 23.0,
                rainfall: 1.5,
                windspeed: 5.0,
                snowfall: 0.0,
                dust_concentration: 18.0,
                cloud_cover: 65.0,
            })
            .rev()
            .collect();
        HistoricalSeries::new(
            london(),
            DateRange::between("2020-06-01", "2020-07-30").unwrap(),
            data,
            "Met Office replay",
        )
    }

    #[tokio::test]
    async fn test_serves_calendar_window_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let provider = StaticProvider::new(vec![archive()]);
        let range = DateRange::between("2026-07-01", "2026-07-10")?;

        let series = provider.fetch_series(&london(), &range).await?;

        assert_eq!(series.len(), 10);
        assert_eq!(series.source(), "Met Office replay");
        assert_eq!(series.date_range(), &range);
        assert!(series
            .observations()
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_location_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let provider = StaticProvider::new(vec![archive()]);
        let range = DateRange::between("2026-07-01", "2026-07-10")?;
        let rome = Location::new("Rome, Italy", LatLon(41.9028, 12.4964));

        let result = provider.fetch_series(&rome, &range).await;

        assert!(matches!(result, Err(ProviderError::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_same_name_elsewhere_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let provider = StaticProvider::new(vec![archive()]);
        let range = DateRange::between("2026-07-01", "2026-07-10")?;
        let london_ontario = Location::new("London, UK", LatLon(42.9849, -81.2453));

        let result = provider.fetch_series(&london_ontario, &range).await;

        assert!(matches!(result, Err(ProviderError::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_year_long_window_one_day_short_skips_that_day() -> Result<(), Box<dyn std::error::Error>> {
        let start = NaiveDate::from_ymd_opt(2019, 12, 30).unwrap();
        let data: Vec<Observation> = (0..3)
            .map(|i| Observation {
                date: start + Duration::days(i),
                ..archive().observations()[0]
            })
            .collect();
        let provider = StaticProvider::new(vec![HistoricalSeries::new(
            london(),
            DateRange::between("2019-12-30", "2020-01-01")?,
            data,
            "Met Office replay",
        )]);
        let range = DateRange::between("2024-01-01", "2024-12-30")?;

        let series = provider.fetch_series(&london(), &range).await?;

        let dates: Vec<NaiveDate> = series.observations().iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            [
                NaiveDate::from_ymd_opt(2019, 12, 30).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            ]
        );
        Ok(())
    }
}
