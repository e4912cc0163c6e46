//! Seasonal synthetic weather, for demos and for running without an archive.
//!
//! Values are plausible for the latitude and time of year but are not
//! observations. Every series produced here is tagged with
//! [`SYNTHETIC_SOURCE`] so downstream consumers can tell.

use crate::provider::error::ProviderError;
use crate::provider::HistoricalDataProvider;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::observation::Observation;
use crate::types::series::{HistoricalSeries, SYNTHETIC_SOURCE};
use crate::types::traits::utils::clamped_ymd;
use crate::utils::round_to;
use bon::bon;
use chrono::{Datelike, Duration, Local, NaiveDate};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

const DEFAULT_YEARS_OF_HISTORY: u32 = 20;

/// Generates seasonal daily weather for the years before `today`.
///
/// For a date range, one copy of its calendar window is generated for each of
/// the `years_of_history` years preceding the current one. Days after `today`
/// are skipped. A seeded provider is deterministic: the same arguments give
/// the same series.
///
/// # Examples
///
/// ```rust
/// use weather_odds::{DateRange, LatLon, Location, SyntheticProvider};
/// use chrono::NaiveDate;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = SyntheticProvider::builder()
///     .years_of_history(5)
///     .seed(42)
///     .today(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .build();
///
/// let denver = Location::new("Denver, USA", LatLon(39.7392, -104.9903));
/// let week = DateRange::between("2025-12-24", "2025-12-30")?;
/// let series = provider.generate(&denver, &week)?;
///
/// assert_eq!(series.len(), 5 * 7);
/// assert!(series.is_synthetic());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    years_of_history: u32,
    seed: Option<u64>,
    today: NaiveDate,
}

#[bon]
impl SyntheticProvider {
    /// # Arguments
    ///
    /// * `.years_of_history(u32)`: Optional. Defaults to `20`.
    /// * `.seed(u64)`: Optional. Without a seed every call draws fresh entropy.
    /// * `.today(NaiveDate)`: Optional. Defaults to the current local date.
    ///   History covers the years before this date's year.
    #[builder]
    pub fn new(years_of_history: Option<u32>, seed: Option<u64>, today: Option<NaiveDate>) -> Self {
        Self {
            years_of_history: years_of_history.unwrap_or(DEFAULT_YEARS_OF_HISTORY),
            seed,
            today: today.unwrap_or_else(|| Local::now().date_naive()),
        }
    }

    pub fn years_of_history(&self) -> u32 {
        self.years_of_history
    }

    /// `years` as a year offset, provided `today` minus `years` is still a
    /// representable date.
    fn lookback(&self, years: u32) -> Result<i32, ProviderError> {
        let too_long = || ProviderError::HistoryTooLong {
            years,
            today: self.today,
        };
        let offset = i32::try_from(years).map_err(|_| too_long())?;
        let earliest = self.today.year().checked_sub(offset).ok_or_else(too_long)?;
        NaiveDate::from_ymd_opt(earliest, 1, 1).ok_or_else(too_long)?;
        Ok(offset)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generates the series for `location` over the calendar window of `date_range`.
    ///
    /// A window starting on Feb 29 starts on Feb 28 in non-leap years.
    pub fn generate(
        &self,
        location: &Location,
        date_range: &DateRange,
    ) -> Result<HistoricalSeries, ProviderError> {
        let years = self.lookback(self.years_of_history)?;
        let mut rng = self.rng();
        let start = date_range.start();
        let num_days = date_range.num_days();
        let mut data = Vec::new();

        for year_offset in 0..years {
            let year = self.today.year() - year_offset - 1;
            let first_day =
                clamped_ymd(year, start.month(), start.day()).ok_or(ProviderError::DateOutOfRange {
                    year,
                    month: start.month(),
                    day: start.day(),
                })?;
            for day_offset in 0..num_days {
                let date = first_day + Duration::days(day_offset);
                if date > self.today {
                    continue;
                }
                data.push(generate_observation(&mut rng, location, date));
            }
        }
        data.sort_by_key(|o| o.date);

        info!(
            "Generated {} synthetic days for {} ({} years of {} days)",
            data.len(),
            location.name,
            self.years_of_history,
            num_days
        );
        Ok(HistoricalSeries::new(
            location.clone(),
            *date_range,
            data,
            SYNTHETIC_SOURCE,
        ))
    }

    /// The same calendar day as `date` in each of the `years` years before
    /// the current one, most recent first.
    pub fn multi_year_comparison(
        &self,
        location: &Location,
        date: NaiveDate,
        years: u32,
    ) -> Result<Vec<Observation>, ProviderError> {
        let lookback = self.lookback(years)?;
        let mut rng = self.rng();
        let mut observations = Vec::new();
        for year_offset in 1..=lookback {
            let year = self.today.year() - year_offset;
            let historical = clamped_ymd(year, date.month(), date.day()).ok_or(
                ProviderError::DateOutOfRange {
                    year,
                    month: date.month(),
                    day: date.day(),
                },
            )?;
            if historical <= self.today {
                observations.push(generate_observation(&mut rng, location, historical));
            }
        }
        Ok(observations)
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HistoricalDataProvider for SyntheticProvider {
    async fn fetch_series(
        &self,
        location: &Location,
        date_range: &DateRange,
    ) -> Result<HistoricalSeries, ProviderError> {
        let provider = self.clone();
        let location = location.clone();
        let date_range = *date_range;
        tokio::task::spawn_blocking(move || provider.generate(&location, &date_range)).await?
    }
}

/// Signed angle of `day_of_year` from the summer peak of the hemisphere.
fn seasonal_angle(day_of_year: f64, latitude: f64) -> f64 {
    let summer_peak = if latitude >= 0.0 { 172.0 } else { 355.0 };
    (day_of_year - summer_peak) / 365.0 * 2.0 * PI
}

fn seasonal_temperature(day_of_year: f64, latitude: f64) -> f64 {
    let latitude_factor = 1.0 - latitude.abs() / 90.0 * 0.5;
    let tropical_offset = if latitude.abs() < 23.5 { 10.0 } else { 0.0 };
    15.0 + seasonal_angle(day_of_year, latitude).cos() * 20.0 * latitude_factor + tropical_offset
}

fn rainfall(rng: &mut impl Rng, day_of_year: f64, latitude: f64) -> f64 {
    let rain_probability = 0.3 + seasonal_angle(day_of_year, latitude).cos() * 0.2;
    if rng.gen::<f64>() > rain_probability {
        return 0.0;
    }
    let intensity: f64 = rng.gen();
    if intensity > 0.9 {
        rng.gen::<f64>() * 80.0 + 40.0
    } else if intensity > 0.7 {
        rng.gen::<f64>() * 30.0 + 10.0
    } else {
        rng.gen::<f64>() * 10.0
    }
}

fn in_dust_belt(location: &Location) -> bool {
    let (lat, lon) = (location.latitude, location.longitude);
    (lat > 15.0 && lat < 35.0 && lon > -20.0 && lon < 60.0)
        || (lat > 30.0 && lat < 50.0 && lon > 60.0 && lon < 120.0)
}

fn dust_concentration(rng: &mut impl Rng, location: &Location, day_of_year: f64) -> f64 {
    let base = if in_dust_belt(location) { 80.0 } else { 20.0 };
    // dust peaks with the northern summer regardless of hemisphere
    let summer_increase = ((day_of_year - 172.0) / 365.0 * 2.0 * PI).cos() * 30.0;
    let variation = (rng.gen::<f64>() - 0.5) * 40.0;
    (base + summer_increase + variation).max(5.0)
}

fn generate_observation(rng: &mut impl Rng, location: &Location, date: NaiveDate) -> Observation {
    let day_of_year = f64::from(date.ordinal());
    let latitude = location.latitude;

    let temperature = seasonal_temperature(day_of_year, latitude) + (rng.gen::<f64>() - 0.5) * 10.0;
    let temperature_min = temperature - rng.gen::<f64>() * 5.0 - 2.0;
    let temperature_max = temperature + rng.gen::<f64>() * 5.0 + 2.0;
    let rainfall = rainfall(rng, day_of_year, latitude);
    let high_latitude_boost = if latitude.abs() > 40.0 { 5.0 } else { 0.0 };
    let windspeed = rng.gen::<f64>() * 12.0 + 2.0 + high_latitude_boost;
    let snowfall = if temperature < 0.0 && rng.gen::<f64>() > 0.6 {
        rng.gen::<f64>() * 15.0
    } else {
        0.0
    };
    let dust_concentration = dust_concentration(rng, location, day_of_year);
    let cloud_cover = if rainfall > 1.0 {
        60.0 + rng.gen::<f64>() * 40.0
    } else {
        rng.gen::<f64>() * 60.0
    };

    Observation {
        date,
        temperature: round_to(temperature, 1),
        temperature_min: round_to(temperature_min, 1),
        temperature_max: round_to(temperature_max, 1),
        rainfall: round_to(rainfall, 1),
        windspeed: round_to(windspeed, 1),
        snowfall: round_to(snowfall, 1),
        dust_concentration: round_to(dust_concentration, 1),
        cloud_cover: round_to(cloud_cover, 0),
    }
}
