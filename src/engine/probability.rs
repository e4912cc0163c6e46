//! Per-threshold occurrence probabilities.

use crate::evaluator::ThresholdEvaluator;
use crate::types::analysis::{Likelihood, ProbabilityResult};
use crate::types::series::HistoricalSeries;
use crate::types::threshold::Threshold;
use crate::types::variable::VariableRegistry;
use crate::utils::round_to;
use log::debug;

/// Evaluates every threshold over the whole series, one scan per threshold.
/// Results come back in threshold order.
pub(crate) fn compute_probabilities(
    registry: &VariableRegistry,
    series: &HistoricalSeries,
    thresholds: &[Threshold],
) -> Vec<ProbabilityResult> {
    let evaluator = ThresholdEvaluator::new(registry);
    let observations = series.observations();
    let total_days = observations.len();

    thresholds
        .iter()
        .map(|threshold| {
            let matching_days = evaluator.count_matches(observations, threshold);
            let probability = occurrence_probability(matching_days, total_days);
            debug!(
                "{}: {} of {} days match ({}%)",
                threshold.describe(registry),
                matching_days,
                total_days,
                probability
            );
            ProbabilityResult::new(
                threshold.clone(),
                registry.name_of(threshold.variable_id()).to_string(),
                probability,
                matching_days,
                total_days,
                interpret(registry, probability, threshold),
            )
        })
        .collect()
}

/// `100 × matching / total`, rounded to one decimal. An empty series gives 0.
pub(crate) fn occurrence_probability(matching_days: usize, total_days: usize) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    round_to(matching_days as f64 / total_days as f64 * 100.0, 1)
}

/// `"{likelihood} to experience {condition, lowercased}"`.
pub(crate) fn interpret(registry: &VariableRegistry, probability: f64, threshold: &Threshold) -> String {
    format!(
        "{} to experience {}",
        Likelihood::from_probability(probability),
        threshold.describe(registry).to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::date_range::DateRange;
    use crate::types::location::{LatLon, Location};
    use crate::types::observation::Observation;
    use crate::types::threshold::Operator;
    use chrono::{Duration, NaiveDate};

    fn series_from(values: &[(f64, f64)]) -> HistoricalSeries {
        let start = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let data = values
            .iter()
            .enumerate()
            .map(|(i, &(temperature, rainfall))| Observation {
                date: start + Duration::days(i as i64),
                temperature,
                temperature_min: temperature - 4.0,
                temperature_max: temperature + 4.0,
                rainfall,
                windspeed: 5.0,
                snowfall: 0.0,
                dust_concentration: 30.0,
                cloud_cover: 20.0,
            })
            .collect();
        HistoricalSeries::new(
            Location::new("Cairo, Egypt", LatLon(30.0444, 31.2357)),
            DateRange::new(start, start + Duration::days(values.len().max(1) as i64 - 1)).unwrap(),
            data,
            "test",
        )
    }

    #[test]
    fn test_hot_days_scenario() -> Result<(), crate::ThresholdError> {
        let registry = VariableRegistry::builtin();
        let temperatures: Vec<(f64, f64)> = (30..40).map(|t| (t as f64, 0.0)).collect();
        let series = series_from(&temperatures);
        let hot = Threshold::new(&registry, "temperature", Operator::GreaterOrEqual(35.0))?;

        let results = compute_probabilities(&registry, &series, &[hot]);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].historical_occurrences(), 5);
        assert_eq!(results[0].total_days(), 10);
        assert_eq!(results[0].probability(), 50.0);
        assert_eq!(results[0].variable_name(), "Temperature");
        assert_eq!(
            results[0].interpretation(),
            "Likely to experience temperature ≥ 35°c"
        );
        Ok(())
    }

    #[test]
    fn test_dry_days_scenario() -> Result<(), crate::ThresholdError> {
        let registry = VariableRegistry::builtin();
        let series = series_from(&[(20.0, 0.0); 4]);
        let rain = Threshold::new(&registry, "rainfall", Operator::GreaterThan(0.0))?
            .with_label("Any Rain");

        let results = compute_probabilities(&registry, &series, &[rain]);

        assert_eq!(results[0].probability(), 0.0);
        assert_eq!(results[0].interpretation(), "Very unlikely to experience any rain");
        Ok(())
    }

    #[test]
    fn test_empty_series_yields_zero() -> Result<(), crate::ThresholdError> {
        let registry = VariableRegistry::builtin();
        let series = series_from(&[]);
        let rain = Threshold::new(&registry, "rainfall", Operator::GreaterThan(0.0))?;

        let results = compute_probabilities(&registry, &series, &[rain]);

        assert_eq!(results[0].probability(), 0.0);
        assert_eq!(results[0].historical_occurrences(), 0);
        assert_eq!(results[0].total_days(), 0);
        Ok(())
    }

    #[test]
    fn test_results_follow_threshold_order() -> Result<(), crate::ThresholdError> {
        let registry = VariableRegistry::builtin();
        let series = series_from(&[(10.0, 1.0), (20.0, 0.0), (30.0, 5.0)]);
        let thresholds = vec![
            Threshold::new(&registry, "rainfall", Operator::GreaterThan(0.5))?,
            Threshold::new(&registry, "temperature", Operator::LessThan(15.0))?,
            Threshold::new(&registry, "rainfall", Operator::LessOrEqual(0.0))?,
        ];

        let results = compute_probabilities(&registry, &series, &thresholds);

        let ids: Vec<&str> = results.iter().map(|r| r.variable_id()).collect();
        assert_eq!(ids, ["rainfall", "temperature", "rainfall"]);
        assert_eq!(results[0].probability(), 66.7);
        assert_eq!(results[1].probability(), 33.3);
        assert_eq!(results[2].probability(), 33.3);
        for (result, threshold) in results.iter().zip(&thresholds) {
            assert_eq!(result.threshold(), threshold);
        }
        Ok(())
    }

    #[test]
    fn test_occurrence_probability_rounding() {
        assert_eq!(occurrence_probability(0, 0), 0.0);
        assert_eq!(occurrence_probability(1, 3), 33.3);
        assert_eq!(occurrence_probability(2, 3), 66.7);
        assert_eq!(occurrence_probability(1, 8), 12.5);
        assert_eq!(occurrence_probability(7, 7), 100.0);
    }
}
