use crate::export::error::ExportError;
use crate::frame::series_dataframe;
use crate::types::series::HistoricalSeries;
use crate::types::variable::VariableRegistry;
use polars::prelude::{col, CsvWriter, Expr, IntoLazy, SerWriter};

/// Source column and header of each CSV column, in output order.
const CSV_COLUMNS: [(&str, &str); 9] = [
    ("date", "Date"),
    ("temperature", "Temperature (°C)"),
    ("temperatureMin", "Temperature Min (°C)"),
    ("temperatureMax", "Temperature Max (°C)"),
    ("rainfall", "Rainfall (mm)"),
    ("windspeed", "Wind Speed (m/s)"),
    ("snowfall", "Snowfall (cm)"),
    ("dustConcentration", "Dust Concentration (μg/m³)"),
    ("cloudCover", "Cloud Cover (%)"),
];

/// Writes one row per observation, dates as `YYYY-MM-DD`, under a fixed
/// header. Only the built-in observation fields are exported.
pub fn series_to_csv(series: &HistoricalSeries) -> Result<String, ExportError> {
    let columns: Vec<Expr> = CSV_COLUMNS
        .iter()
        .map(|(id, header)| col(*id).alias(*header))
        .collect();
    let mut df = series_dataframe(series, &VariableRegistry::builtin())
        .and_then(|df| df.lazy().select(columns).collect())
        .map_err(ExportError::CsvWrite)?;

    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut df)
        .map_err(ExportError::CsvWrite)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::date_range::DateRange;
    use crate::types::location::{LatLon, Location};
    use crate::types::observation::Observation;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_layout() -> Result<(), Box<dyn std::error::Error>> {
        let day = |d, temperature| Observation {
            date: NaiveDate::from_ymd_opt(2024, 7, d).unwrap(),
            temperature,
            temperature_min: 19.3,
            temperature_max: 29.8,
            rainfall: 0.4,
            windspeed: 3.6,
            snowfall: 0.5,
            dust_concentration: 41.7,
            cloud_cover: 35.0,
        };
        let series = HistoricalSeries::new(
            Location::new("Tokyo, Japan", LatLon(35.6762, 139.6503)),
            DateRange::between("2024-07-01", "2024-07-02")?,
            vec![day(1, 24.5), day(2, 26.1)],
            "test",
        );

        let csv = series_to_csv(&series)?;
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Date,Temperature (°C),Temperature Min (°C),Temperature Max (°C),Rainfall (mm),\
             Wind Speed (m/s),Snowfall (cm),Dust Concentration (μg/m³),Cloud Cover (%)"
        );
        assert!(lines[1].starts_with("2024-07-01,24.5,19.3,29.8,0.4,3.6,0.5,41.7,"));
        assert!(lines[2].starts_with("2024-07-02,26.1,"));
        assert_eq!(lines[2].split(',').count(), 9);
        Ok(())
    }

    #[test]
    fn test_empty_series_has_header_only() -> Result<(), Box<dyn std::error::Error>> {
        let series = HistoricalSeries::new(
            Location::new("Tokyo, Japan", LatLon(35.6762, 139.6503)),
            DateRange::between("2024-07-01", "2024-07-02")?,
            vec![],
            "test",
        );
        let csv = series_to_csv(&series)?;
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("Date,Temperature (°C),"));
        Ok(())
    }
}
