//! Orchestration of one complete analysis.

use crate::engine::probability::compute_probabilities;
use crate::engine::risk::compute_risk_score;
use crate::engine::summary::generate_summary;
use crate::types::analysis::WeatherAnalysis;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::series::HistoricalSeries;
use crate::types::threshold::Threshold;
use crate::types::variable::VariableRegistry;
use chrono::{DateTime, Utc};
use log::debug;

/// probabilities -> risk score -> summary, stamped with `generated_at`.
pub(crate) fn build_analysis(
    registry: &VariableRegistry,
    location: &Location,
    date_range: &DateRange,
    series: &HistoricalSeries,
    thresholds: &[Threshold],
    generated_at: DateTime<Utc>,
) -> WeatherAnalysis {
    let probabilities = compute_probabilities(registry, series, thresholds);
    let risk_score = compute_risk_score(registry, &probabilities);
    let summary = generate_summary(location, date_range, &probabilities, risk_score);
    debug!(
        "Analysis for {} over {} days and {} thresholds: risk score {}",
        location.name,
        series.len(),
        thresholds.len(),
        risk_score
    );

    WeatherAnalysis::new(
        location.clone(),
        *date_range,
        probabilities,
        summary,
        risk_score,
        series.clone(),
        generated_at,
    )
}
