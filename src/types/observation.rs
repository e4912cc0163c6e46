//! Defines the `Observation` record: one day of weather measurements at one location.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of weather measurements at a single location.
///
/// Observations are produced by a [`crate::HistoricalDataProvider`] and are
/// never modified by the engine. Field names serialize in camelCase
/// (`temperatureMin`, `dustConcentration`, ...), which is also the id under
/// which each field is registered in the [`crate::VariableRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// The calendar day the measurements belong to.
    pub date: NaiveDate,
    /// Daily mean temperature in °C.
    pub temperature: f64,
    /// Daily minimum temperature in °C.
    pub temperature_min: f64,
    /// Daily maximum temperature in °C.
    pub temperature_max: f64,
    /// Total precipitation in mm.
    pub rainfall: f64,
    /// Average wind speed in m/s.
    pub windspeed: f64,
    /// Snowfall in cm.
    pub snowfall: f64,
    /// Atmospheric dust concentration in μg/m³.
    pub dust_concentration: f64,
    /// Share of the sky covered by clouds, in percent.
    pub cloud_cover: f64,
}

impl Observation {
    /// Returns `true` when every numeric field is finite (no NaN or infinity).
    pub fn is_well_formed(&self) -> bool {
        [
            self.temperature,
            self.temperature_min,
            self.temperature_max,
            self.rainfall,
            self.windspeed,
            self.snowfall,
            self.dust_concentration,
            self.cloud_cover,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
