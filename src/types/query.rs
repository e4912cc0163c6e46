//! The parameters of one analysis request.

use crate::types::analysis::WeatherAnalysis;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::threshold::Threshold;
use serde::{Deserialize, Serialize};

/// What was asked: where, when, and which conditions.
///
/// `selected_variables` lists the distinct variable ids of `thresholds` in
/// first-use order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    pub location: Location,
    pub date_range: DateRange,
    pub selected_variables: Vec<String>,
    pub thresholds: Vec<Threshold>,
}

impl QueryParameters {
    pub fn new(location: Location, date_range: DateRange, thresholds: Vec<Threshold>) -> Self {
        let mut selected_variables: Vec<String> = Vec::with_capacity(thresholds.len());
        for threshold in &thresholds {
            if !selected_variables.iter().any(|id| id == threshold.variable_id()) {
                selected_variables.push(threshold.variable_id().to_string());
            }
        }
        Self {
            location,
            date_range,
            selected_variables,
            thresholds,
        }
    }

    /// Recovers the query an analysis answered.
    pub fn from_analysis(analysis: &WeatherAnalysis) -> Self {
        Self::new(
            analysis.location().clone(),
            *analysis.date_range(),
            analysis
                .probabilities()
                .iter()
                .map(|result| result.threshold().clone())
                .collect(),
        )
    }

    /// Compact JSON of location, date range and thresholds. Equal queries
    /// give equal keys; threshold order is significant.
    pub fn canonical_key(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&(&self.location, &self.date_range, &self.thresholds))
    }
}
