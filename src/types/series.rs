//! The historical series an analysis is computed from.

use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::observation::Observation;
use crate::types::variable::VariableRegistry;
use serde::{Deserialize, Serialize};

/// Provenance string carried by series produced by [`crate::SyntheticProvider`].
pub const SYNTHETIC_SOURCE: &str = "Synthetic seasonal data (not observed)";

/// Daily observations for one location over one nominal date range, tagged
/// with where the data came from.
///
/// Aggregate computations do not depend on the order of observations;
/// providers deliver them in chronological order for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSeries {
    location: Location,
    data: Vec<Observation>,
    source: String,
    date_range: DateRange,
}

impl HistoricalSeries {
    pub fn new(
        location: Location,
        date_range: DateRange,
        data: Vec<Observation>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            location,
            data,
            source: source.into(),
            date_range,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn observations(&self) -> &[Observation] {
        &self.data
    }

    /// The provenance string, e.g. the name of the upstream archive.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the series was synthesized rather than observed.
    pub fn is_synthetic(&self) -> bool {
        self.source == SYNTHETIC_SOURCE
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values of one variable across the series, in observation order.
    /// `None` if `variable_id` is not registered.
    pub fn values(&self, registry: &VariableRegistry, variable_id: &str) -> Option<Vec<f64>> {
        let variable = registry.get(variable_id)?;
        Some(self.data.iter().map(|o| variable.value(o)).collect())
    }

    /// Number of observations that are not well formed (contain NaN or infinities).
    pub fn malformed_count(&self) -> usize {
        self.data.iter().filter(|o| !o.is_well_formed()).count()
    }
}
