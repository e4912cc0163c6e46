use crate::export::error::ExportError;
use crate::types::analysis::WeatherAnalysis;
use crate::types::query::QueryParameters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version written to, and required from, every export document.
pub const FORMAT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_date: DateTime<Utc>,
    /// Provenance of the historical series.
    pub data_source: String,
    pub format_version: String,
    pub notes: String,
}

/// A self-contained JSON export: the query, the full analysis including its
/// historical series, and metadata.
///
/// ```
/// use weather_odds::{DateRange, ExportDocument, LatLon, Location, Operator, SyntheticProvider, WeatherOdds};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let odds = WeatherOdds::new();
/// let paris = Location::new("Paris, France", LatLon(48.8566, 2.3522));
/// let range = DateRange::between("2025-05-10", "2025-05-12")?;
/// let series = SyntheticProvider::builder().seed(11).years_of_history(3).build().generate(&paris, &range)?;
/// let thresholds = vec![odds.threshold("rainfall", Operator::GreaterThan(5.0))?];
/// let analysis = odds.build_analysis(&paris, &range, &series, &thresholds);
///
/// let json = ExportDocument::new(&analysis).to_json()?;
/// let restored = ExportDocument::from_json(&json)?;
/// assert_eq!(restored.analysis, analysis);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub query: QueryParameters,
    pub analysis: WeatherAnalysis,
    pub metadata: ExportMetadata,
}

impl ExportDocument {
    /// Wraps `analysis`, stamped with the current time.
    pub fn new(analysis: &WeatherAnalysis) -> Self {
        Self::exported_at(analysis, Utc::now())
    }

    pub fn exported_at(analysis: &WeatherAnalysis, export_date: DateTime<Utc>) -> Self {
        let series = analysis.historical_data();
        let notes = if series.is_synthetic() {
            "Values are generated from seasonal patterns and are not observations."
        } else {
            "Values are historical daily observations."
        };
        Self {
            query: QueryParameters::from_analysis(analysis),
            analysis: analysis.clone(),
            metadata: ExportMetadata {
                export_date,
                data_source: series.source().to_string(),
                format_version: FORMAT_VERSION.to_string(),
                notes: notes.to_string(),
            },
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document written by [`ExportDocument::to_json`].
    ///
    /// # Errors
    ///
    /// [`ExportError::Json`] for malformed documents, including thresholds or
    /// date ranges with invalid bounds, and
    /// [`ExportError::UnsupportedFormatVersion`] for other format versions.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let document: ExportDocument = serde_json::from_str(json)?;
        if document.metadata.format_version != FORMAT_VERSION {
            return Err(ExportError::UnsupportedFormatVersion {
                found: document.metadata.format_version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::synthetic::SyntheticProvider;
    use crate::types::date_range::DateRange;
    use crate::types::location::{LatLon, Location};
    use crate::types::threshold::Operator;
    use crate::WeatherOdds;
    use chrono::{NaiveDate, TimeZone};

    fn analysis() -> Result<WeatherAnalysis, Box<dyn std::error::Error>> {
        let odds = WeatherOdds::new();
        let cairo = Location::new("Cairo, Egypt", LatLon(30.0444, 31.2357));
        let range = DateRange::between("2025-08-01", "2025-08-05")?;
        let series = SyntheticProvider::builder()
            .seed(2024)
            .years_of_history(4)
            .today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .build()
            .generate(&cairo, &range)?;
        let thresholds = vec![
            odds.threshold("temperature", Operator::Between { low: 28.0, high: 40.0 })?
                .with_label("Hot but bearable"),
            odds.threshold("dustConcentration", Operator::GreaterThan(100.0))?,
        ];
        Ok(odds.build_analysis_at(
            &cairo,
            &range,
            &series,
            &thresholds,
            Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap(),
        ))
    }

    #[test]
    fn test_json_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let analysis = analysis()?;
        let document =
            ExportDocument::exported_at(&analysis, Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap());

        let restored = ExportDocument::from_json(&document.to_json()?)?;

        assert_eq!(restored, document);
        assert_eq!(restored.query.selected_variables, ["temperature", "dustConcentration"]);
        assert_eq!(restored.metadata.format_version, "1.0.0");
        assert_eq!(
            restored.metadata.data_source,
            "Synthetic seasonal data (not observed)"
        );
        Ok(())
    }

    #[test]
    fn test_document_shape() -> Result<(), Box<dyn std::error::Error>> {
        let document = ExportDocument::new(&analysis()?);
        let value: serde_json::Value = serde_json::from_str(&document.to_json()?)?;

        assert_eq!(value["query"]["location"]["name"], "Cairo, Egypt");
        assert_eq!(value["query"]["dateRange"]["startDate"], "2025-08-01");
        assert_eq!(value["query"]["thresholds"][0]["operator"], "between");
        assert_eq!(value["query"]["thresholds"][0]["value2"], 40.0);
        assert_eq!(value["analysis"]["historicalData"]["data"][0]["date"], "2021-08-01");
        assert!(value["analysis"]["riskScore"].is_number());
        assert!(value["metadata"]["exportDate"].is_string());
        Ok(())
    }

    #[test]
    fn test_rejects_other_versions_and_bad_thresholds() -> Result<(), Box<dyn std::error::Error>> {
        let json = ExportDocument::new(&analysis()?).to_json()?;

        let future = json.replace("\"formatVersion\": \"1.0.0\"", "\"formatVersion\": \"2.0.0\"");
        assert!(matches!(
            ExportDocument::from_json(&future),
            Err(ExportError::UnsupportedFormatVersion { .. })
        ));

        let inverted = json.replacen("\"value2\": 40.0", "\"value2\": 1.0", 1);
        assert!(matches!(
            ExportDocument::from_json(&inverted),
            Err(ExportError::Json(_))
        ));
        Ok(())
    }
}
