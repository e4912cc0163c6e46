//! The weather-variable capability table.
//!
//! Every variable a threshold or statistic can refer to is registered once,
//! by id, together with its display metadata, its risk weight and the
//! accessor that reads it from an [`Observation`]. Nothing else in the crate
//! branches on variable ids.

use crate::types::observation::Observation;
use std::collections::HashMap;

/// Reads one variable's value from an observation.
pub type Accessor = fn(&Observation) -> f64;

/// Risk weight applied to variables that carry no weight of their own.
pub const DEFAULT_RISK_WEIGHT: f64 = 0.10;

/// Describes one weather variable: how to name it, how to read it and how
/// much it counts towards the composite risk score.
#[derive(Debug, Clone, Copy)]
pub struct WeatherVariable {
    /// Stable identifier used in thresholds and exports (e.g. `"windspeed"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Wind Speed"`).
    pub name: &'static str,
    /// Unit suffix appended to values (e.g. `"m/s"`).
    pub unit: &'static str,
    pub description: &'static str,
    /// Weight in the risk score. `None` falls back to [`DEFAULT_RISK_WEIGHT`].
    pub risk_weight: Option<f64>,
    pub accessor: Accessor,
}

impl WeatherVariable {
    /// Reads this variable from `observation`.
    pub fn value(&self, observation: &Observation) -> f64 {
        (self.accessor)(observation)
    }

    pub fn weight(&self) -> f64 {
        self.risk_weight.unwrap_or(DEFAULT_RISK_WEIGHT)
    }
}

fn temperature(o: &Observation) -> f64 {
    o.temperature
}
fn temperature_min(o: &Observation) -> f64 {
    o.temperature_min
}
fn temperature_max(o: &Observation) -> f64 {
    o.temperature_max
}
fn rainfall(o: &Observation) -> f64 {
    o.rainfall
}
fn windspeed(o: &Observation) -> f64 {
    o.windspeed
}
fn snowfall(o: &Observation) -> f64 {
    o.snowfall
}
fn dust_concentration(o: &Observation) -> f64 {
    o.dust_concentration
}
fn cloud_cover(o: &Observation) -> f64 {
    o.cloud_cover
}

/// The variables every [`VariableRegistry::builtin`] registry starts with.
pub static BUILTIN_VARIABLES: &[WeatherVariable] = &[
    WeatherVariable {
        id: "temperature",
        name: "Temperature",
        unit: "°C",
        description: "Mean, minimum, and maximum temperature",
        risk_weight: Some(0.25),
        accessor: temperature,
    },
    WeatherVariable {
        id: "rainfall",
        name: "Rainfall",
        unit: "mm",
        description: "Total precipitation",
        risk_weight: Some(0.25),
        accessor: rainfall,
    },
    WeatherVariable {
        id: "windspeed",
        name: "Wind Speed",
        unit: "m/s",
        description: "Average wind speed",
        risk_weight: Some(0.20),
        accessor: windspeed,
    },
    WeatherVariable {
        id: "snowfall",
        name: "Snowfall",
        unit: "cm",
        description: "Snow depth and accumulation",
        risk_weight: Some(0.15),
        accessor: snowfall,
    },
    WeatherVariable {
        id: "dustConcentration",
        name: "Dust Concentration",
        unit: "μg/m³",
        description: "Atmospheric dust and aerosol levels",
        risk_weight: Some(0.10),
        accessor: dust_concentration,
    },
    WeatherVariable {
        id: "cloudCover",
        name: "Cloud Cover",
        unit: "%",
        description: "Percentage of sky covered by clouds",
        risk_weight: Some(0.05),
        accessor: cloud_cover,
    },
    WeatherVariable {
        id: "temperatureMin",
        name: "Minimum Temperature",
        unit: "°C",
        description: "Daily minimum temperature",
        risk_weight: None,
        accessor: temperature_min,
    },
    WeatherVariable {
        id: "temperatureMax",
        name: "Maximum Temperature",
        unit: "°C",
        description: "Daily maximum temperature",
        risk_weight: None,
        accessor: temperature_max,
    },
];

/// Maps variable ids to their [`WeatherVariable`] descriptions.
///
/// Iteration follows registration order, so the built-in variables always
/// come first in the order listed in [`BUILTIN_VARIABLES`].
///
/// # Examples
///
/// ```
/// use weather_odds::{VariableRegistry, WeatherVariable, Observation};
///
/// fn diurnal_range(o: &Observation) -> f64 {
///     o.temperature_max - o.temperature_min
/// }
///
/// let mut registry = VariableRegistry::builtin();
/// registry.register(WeatherVariable {
///     id: "diurnalRange",
///     name: "Diurnal Range",
///     unit: "°C",
///     description: "Difference between daily maximum and minimum",
///     risk_weight: None,
///     accessor: diurnal_range,
/// });
///
/// assert!(registry.get("diurnalRange").is_some());
/// assert_eq!(registry.weight_of("diurnalRange"), 0.10);
/// assert_eq!(registry.weight_of("temperature"), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct VariableRegistry {
    variables: Vec<WeatherVariable>,
    index: HashMap<&'static str, usize>,
}

impl VariableRegistry {
    /// A registry with no variables at all.
    pub fn empty() -> Self {
        Self {
            variables: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// A registry holding the [`BUILTIN_VARIABLES`].
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for variable in BUILTIN_VARIABLES {
            registry.register(*variable);
        }
        registry
    }

    /// Adds `variable`, replacing and returning any variable with the same id.
    pub fn register(&mut self, variable: WeatherVariable) -> Option<WeatherVariable> {
        match self.index.get(variable.id) {
            Some(&position) => Some(std::mem::replace(&mut self.variables[position], variable)),
            None => {
                self.index.insert(variable.id, self.variables.len());
                self.variables.push(variable);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&WeatherVariable> {
        self.index.get(id).map(|&position| &self.variables[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Reads variable `id` from `observation`, or `None` if `id` is not registered.
    pub fn value_of(&self, observation: &Observation, id: &str) -> Option<f64> {
        self.get(id).map(|variable| variable.value(observation))
    }

    /// The risk weight of `id`. Unregistered ids get [`DEFAULT_RISK_WEIGHT`].
    pub fn weight_of(&self, id: &str) -> f64 {
        self.get(id)
            .map(WeatherVariable::weight)
            .unwrap_or(DEFAULT_RISK_WEIGHT)
    }

    /// Display name of `id`, falling back to the id itself.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|variable| variable.name).unwrap_or(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeatherVariable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
