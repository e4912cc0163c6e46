//! Composite risk score over a set of probability results.

use crate::types::analysis::ProbabilityResult;
use crate::types::variable::VariableRegistry;
use crate::utils::round_to;

/// Weighted mean of the result probabilities, rounded to one decimal.
///
/// Each result is weighted by its variable's risk weight; the sum is divided
/// by the weights actually present, so a query over a subset of variables is
/// renormalized rather than diluted. No results gives 0.
pub(crate) fn compute_risk_score(registry: &VariableRegistry, results: &[ProbabilityResult]) -> f64 {
    let (weighted_sum, total_weight) =
        results
            .iter()
            .fold((0.0, 0.0), |(weighted_sum, total_weight), result| {
                let weight = registry.weight_of(result.variable_id());
                (
                    weighted_sum + result.probability() * weight,
                    total_weight + weight,
                )
            });

    if total_weight <= 0.0 {
        return 0.0;
    }
    round_to(weighted_sum / total_weight, 1)
}
