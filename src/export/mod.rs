//! Export of analyses to portable documents: a JSON document of the full
//! analysis and a CSV table of its historical series.

pub mod csv;
pub mod error;
pub mod json;

use crate::types::location::Location;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `weather-analysis-{name}-{yyyy-mm-dd}.{ext}`, with every run of
/// whitespace in the location name replaced by a single `-`.
///
/// ```
/// use weather_odds::{export_file_name, ExportFormat, LatLon, Location};
/// use chrono::NaiveDate;
///
/// let rio = Location::new("Rio de  Janeiro, Brazil", LatLon(-22.9068, -43.1729));
/// let day = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
/// assert_eq!(
///     export_file_name(&rio, day, ExportFormat::Csv),
///     "weather-analysis-Rio-de-Janeiro,-Brazil-2025-10-04.csv"
/// );
/// ```
pub fn export_file_name(location: &Location, date: NaiveDate, format: ExportFormat) -> String {
    let mut name = String::with_capacity(location.name.len());
    let mut in_whitespace = false;
    for c in location.name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    format!(
        "weather-analysis-{}-{}.{}",
        name,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
