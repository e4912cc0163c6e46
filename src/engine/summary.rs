//! Natural-language summary of an analysis.

use crate::types::analysis::{ProbabilityResult, RiskLevel};
use crate::types::date_range::DateRange;
use crate::types::location::Location;

/// Probability at or above which a condition is called out in the summary.
pub(crate) const NOTABLE_PROBABILITY: f64 = 50.0;

/// Summarizes the results for `location`.
///
/// When no result reaches [`NOTABLE_PROBABILITY`] the summary reports
/// favorable conditions. Otherwise it names the risk level of `risk_score`
/// and lists every notable condition with its probability.
pub(crate) fn generate_summary(
    location: &Location,
    _date_range: &DateRange,
    results: &[ProbabilityResult],
    risk_score: f64,
) -> String {
    let notable: Vec<String> = results
        .iter()
        .filter(|result| result.probability() >= NOTABLE_PROBABILITY)
        .map(|result| {
            format!(
                "{} ({}% chance)",
                result.variable_name().to_lowercase(),
                result.probability()
            )
        })
        .collect();

    if notable.is_empty() {
        return format!(
            "Favorable conditions expected for {} during the selected period. \
             Historical data suggests low probability of adverse weather.",
            location.name
        );
    }

    format!(
        "{} for {}. Historical data indicates likely occurrence of: {}.",
        RiskLevel::from_score(risk_score),
        location.name,
        notable.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::LatLon;
    use crate::types::threshold::{Operator, Threshold};
    use crate::types::variable::VariableRegistry;

    fn result(variable: &str, probability: f64) -> ProbabilityResult {
        let registry = VariableRegistry::builtin();
        let threshold = Threshold::new(&registry, variable, Operator::GreaterThan(0.0))
            .unwrap_or_else(|e| panic!("{e}"));
        ProbabilityResult::new(
            threshold,
            registry.name_of(variable).to_string(),
            probability,
            0,
            0,
            String::new(),
        )
    }

    fn tokyo() -> (Location, DateRange) {
        (
            Location::new("Tokyo, Japan", LatLon(35.6762, 139.6503)),
            DateRange::between("2024-08-01", "2024-08-07").unwrap_or_else(|e| panic!("{e}")),
        )
    }

    #[test]
    fn test_favorable_when_nothing_notable() {
        let (location, range) = tokyo();
        let summary = generate_summary(&location, &range, &[result("rainfall", 49.9)], 49.9);
        assert_eq!(
            summary,
            "Favorable conditions expected for Tokyo, Japan during the selected period. \
             Historical data suggests low probability of adverse weather."
        );
    }

    #[test]
    fn test_lists_notable_conditions_with_risk_label() {
        let (location, range) = tokyo();
        let results = [
            result("windspeed", 66.7),
            result("rainfall", 12.0),
            result("temperature", 50.0),
        ];
        let summary = generate_summary(&location, &range, &results, 45.2);
        assert_eq!(
            summary,
            "Moderate risk for Tokyo, Japan. Historical data indicates likely occurrence of: \
             wind speed (66.7% chance), temperature (50% chance)."
        );
    }

    #[test]
    fn test_risk_label_uses_score_bands() {
        let (location, range) = tokyo();
        let results = [result("temperature", 80.0)];
        assert!(generate_summary(&location, &range, &results, 80.0).starts_with("High risk"));
        assert!(generate_summary(&location, &range, &results, 55.0)
            .starts_with("Moderate-high risk"));
        assert!(generate_summary(&location, &range, &results, 10.0)
            .starts_with("Low-moderate risk"));
    }
}
