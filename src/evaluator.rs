//! Evaluates threshold predicates against observations.

use crate::types::observation::Observation;
use crate::types::threshold::Threshold;
use crate::types::variable::VariableRegistry;
use log::warn;

/// Evaluates [`Threshold`]s against [`Observation`]s, resolving variables
/// through a [`VariableRegistry`].
///
/// Thresholds are validated against the registry when they are built, so an
/// unknown variable here means a threshold bypassed validation (for example
/// it was deserialized and never checked). Such a threshold never matches.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdEvaluator<'a> {
    registry: &'a VariableRegistry,
}

impl<'a> ThresholdEvaluator<'a> {
    pub fn new(registry: &'a VariableRegistry) -> Self {
        Self { registry }
    }

    /// Whether `observation` satisfies `threshold`.
    pub fn matches(&self, observation: &Observation, threshold: &Threshold) -> bool {
        match self.registry.get(threshold.variable_id()) {
            Some(variable) => threshold.operator().test(variable.value(observation)),
            None => {
                warn!(
                    "Threshold on unregistered variable '{}' evaluated; treating as no match",
                    threshold.variable_id()
                );
                false
            }
        }
    }

    /// Counts the observations satisfying `threshold` in a single pass.
    ///
    /// The variable is resolved once for the whole scan; an unknown variable
    /// is reported once and yields zero matches.
    pub fn count_matches(&self, observations: &[Observation], threshold: &Threshold) -> usize {
        let Some(variable) = self.registry.get(threshold.variable_id()) else {
            warn!(
                "Threshold on unregistered variable '{}' skipped; counting 0 of {} days",
                threshold.variable_id(),
                observations.len()
            );
            return 0;
        };
        let operator = threshold.operator();
        observations
            .iter()
            .filter(|observation| operator.test(variable.value(observation)))
            .count()
    }
}
