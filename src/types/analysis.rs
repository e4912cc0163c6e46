//! Result types produced by the probability/risk engine.

use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::series::HistoricalSeries;
use crate::types::threshold::{Threshold, ThresholdError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How likely a single threshold is, banded from its probability.
///
/// Bands are inclusive at their lower bound: ≥70 very likely, ≥50 likely,
/// ≥30 possible, ≥15 unlikely, below that very unlikely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Likelihood {
    VeryLikely,
    Likely,
    Possible,
    Unlikely,
    VeryUnlikely,
}

impl Likelihood {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 70.0 {
            Likelihood::VeryLikely
        } else if probability >= 50.0 {
            Likelihood::Likely
        } else if probability >= 30.0 {
            Likelihood::Possible
        } else if probability >= 15.0 {
            Likelihood::Unlikely
        } else {
            Likelihood::VeryUnlikely
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::VeryLikely => "Very likely",
            Likelihood::Likely => "Likely",
            Likelihood::Possible => "Possible",
            Likelihood::Unlikely => "Unlikely",
            Likelihood::VeryUnlikely => "Very unlikely",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk label of a composite risk score. These bands differ from the
/// [`Likelihood`] bands: ≥70 high, ≥50 moderate-high, ≥30 moderate,
/// below that low-moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    High,
    ModerateHigh,
    Moderate,
    LowModerate,
}

impl RiskLevel {
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score >= 70.0 {
            RiskLevel::High
        } else if risk_score >= 50.0 {
            RiskLevel::ModerateHigh
        } else if risk_score >= 30.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::LowModerate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High risk",
            RiskLevel::ModerateHigh => "Moderate-high risk",
            RiskLevel::Moderate => "Moderate risk",
            RiskLevel::LowModerate => "Low-moderate risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one threshold over a historical series.
///
/// `variable_id` always equals the threshold's variable; deserializing a
/// result where they differ fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProbabilityResultRecord")]
pub struct ProbabilityResult {
    variable_id: String,
    variable_name: String,
    probability: f64,
    threshold: Threshold,
    historical_occurrences: usize,
    total_days: usize,
    interpretation: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProbabilityResultRecord {
    variable_id: String,
    variable_name: String,
    probability: f64,
    threshold: Threshold,
    historical_occurrences: usize,
    total_days: usize,
    interpretation: String,
}

impl TryFrom<ProbabilityResultRecord> for ProbabilityResult {
    type Error = ThresholdError;

    fn try_from(record: ProbabilityResultRecord) -> Result<Self, Self::Error> {
        if record.variable_id != record.threshold.variable_id() {
            return Err(ThresholdError::MismatchedVariable {
                result: record.variable_id,
                threshold: record.threshold.variable_id().to_string(),
            });
        }
        Ok(ProbabilityResult::new(
            record.threshold,
            record.variable_name,
            record.probability,
            record.historical_occurrences,
            record.total_days,
            record.interpretation,
        ))
    }
}

impl ProbabilityResult {
    pub(crate) fn new(
        threshold: Threshold,
        variable_name: String,
        probability: f64,
        historical_occurrences: usize,
        total_days: usize,
        interpretation: String,
    ) -> Self {
        Self {
            variable_id: threshold.variable_id().to_string(),
            variable_name,
            probability,
            threshold,
            historical_occurrences,
            total_days,
            interpretation,
        }
    }

    pub fn variable_id(&self) -> &str {
        &self.variable_id
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    /// Share of matching days in percent, in `[0, 100]`, rounded to one decimal.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn likelihood(&self) -> Likelihood {
        Likelihood::from_probability(self.probability)
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Number of days in the series that met the threshold.
    pub fn historical_occurrences(&self) -> usize {
        self.historical_occurrences
    }

    pub fn total_days(&self) -> usize {
        self.total_days
    }

    /// E.g. `"Likely to experience temperature ≥ 35°c"`.
    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }
}

/// Everything produced for one query. Built once by
/// [`crate::WeatherOdds::build_analysis`] and never updated; a new query
/// produces a new analysis.
///
/// Serializes every field, including the full historical series, so an
/// exported analysis is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAnalysis {
    location: Location,
    date_range: DateRange,
    probabilities: Vec<ProbabilityResult>,
    summary: String,
    risk_score: f64,
    historical_data: HistoricalSeries,
    generated_at: DateTime<Utc>,
}

impl WeatherAnalysis {
    pub(crate) fn new(
        location: Location,
        date_range: DateRange,
        probabilities: Vec<ProbabilityResult>,
        summary: String,
        risk_score: f64,
        historical_data: HistoricalSeries,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            location,
            date_range,
            probabilities,
            summary,
            risk_score,
            historical_data,
            generated_at,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    /// One result per input threshold, in input order.
    pub fn probabilities(&self) -> &[ProbabilityResult] {
        &self.probabilities
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    pub fn historical_data(&self) -> &HistoricalSeries {
        &self.historical_data
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
