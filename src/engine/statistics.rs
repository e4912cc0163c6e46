//! Descriptive statistics and value distributions for one variable.

use crate::engine::error::StatisticsError;
use crate::types::series::HistoricalSeries;
use crate::types::variable::VariableRegistry;
use crate::utils::round_to;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Summary figures for one variable over a series, each rounded to two decimals.
///
/// Quantiles (median, p25, p75, p90, p95) pick `sorted[floor(fraction × n)]`
/// with no interpolation between neighbours. This truncating estimator is
/// biased towards lower values for small samples and is kept as-is so that
/// figures stay comparable with previously exported results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStatistics {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by n).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

/// One equal-width bin of a [`Distribution`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// `"{lower:.1}-{upper:.1}"`, for axis labels.
    pub range: String,
    pub lower: f64,
    pub upper: f64,
    pub midpoint: f64,
    pub count: usize,
}

/// Equal-width histogram of one variable between its observed min and max.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub variable_id: String,
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
}

pub(crate) const DEFAULT_BIN_COUNT: usize = 15;

fn finite_values(
    registry: &VariableRegistry,
    series: &HistoricalSeries,
    variable_id: &str,
) -> Result<Vec<f64>, StatisticsError> {
    let values = series
        .values(registry, variable_id)
        .ok_or_else(|| StatisticsError::UnknownVariable(variable_id.to_string()))?;
    if values.is_empty() {
        return Err(StatisticsError::EmptySeries {
            variable: variable_id.to_string(),
        });
    }
    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        return Err(StatisticsError::NonFiniteValues {
            variable: variable_id.to_string(),
            count: non_finite,
        });
    }
    Ok(values)
}

pub(crate) fn compute_statistics(
    registry: &VariableRegistry,
    series: &HistoricalSeries,
    variable_id: &str,
) -> Result<DescriptiveStatistics, StatisticsError> {
    let values = finite_values(registry, series, variable_id)?;
    let n = values.len() as f64;

    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut sorted: Vec<OrderedFloat<f64>> = values.into_iter().map(OrderedFloat).collect();
    sorted.sort();
    let quantile = |fraction: f64| -> f64 {
        let index = (sorted.len() as f64 * fraction).floor() as usize;
        sorted[index.min(sorted.len() - 1)].into_inner()
    };

    Ok(DescriptiveStatistics {
        mean: round_to(mean, 2),
        median: round_to(quantile(0.5), 2),
        std_dev: round_to(variance.sqrt(), 2),
        min: round_to(sorted[0].into_inner(), 2),
        max: round_to(sorted[sorted.len() - 1].into_inner(), 2),
        p25: round_to(quantile(0.25), 2),
        p75: round_to(quantile(0.75), 2),
        p90: round_to(quantile(0.90), 2),
        p95: round_to(quantile(0.95), 2),
    })
}

/// Buckets the variable into `bin_count` equal-width bins spanning
/// `[min, max]`. The maximum lands in the last bin; when every value is the
/// same, all of them land in the first bin.
pub(crate) fn compute_distribution(
    registry: &VariableRegistry,
    series: &HistoricalSeries,
    variable_id: &str,
    bin_count: usize,
) -> Result<Distribution, StatisticsError> {
    if bin_count == 0 {
        return Err(StatisticsError::ZeroBins);
    }
    let values = finite_values(registry, series, variable_id)?;

    let min = values.iter().copied().map(OrderedFloat).min().map_or(0.0, |v| v.0);
    let max = values.iter().copied().map(OrderedFloat).max().map_or(0.0, |v| v.0);
    let bin_width = (max - min) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let lower = min + i as f64 * bin_width;
            let upper = min + (i + 1) as f64 * bin_width;
            HistogramBin {
                range: format!("{lower:.1}-{upper:.1}"),
                lower,
                upper,
                midpoint: lower + bin_width / 2.0,
                count: 0,
            }
        })
        .collect();

    for value in values {
        let index = if bin_width > 0.0 {
            (((value - min) / bin_width).floor() as usize).min(bin_count - 1)
        } else {
            0
        };
        bins[index].count += 1;
    }

    Ok(Distribution {
        variable_id: variable_id.to_string(),
        min,
        max,
        bin_width,
        bins,
    })
}
