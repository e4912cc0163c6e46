//! Threshold predicates over a single weather variable.

use crate::types::variable::VariableRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("Unknown weather variable '{0}'")]
    UnknownVariable(String),

    #[error("'between' threshold on '{variable}' is missing its upper bound")]
    MissingUpperBound { variable: String },

    #[error("'{operator}' threshold on '{variable}' takes a single bound, got a second bound {value2}")]
    UnexpectedUpperBound {
        variable: String,
        operator: OperatorKind,
        value2: f64,
    },

    #[error("'between' threshold on '{variable}' has its lower bound {low} above its upper bound {high}")]
    InvertedBounds { variable: String, low: f64, high: f64 },

    #[error("Threshold on '{variable}' has a non-finite bound ({value})")]
    NonFiniteBound { variable: String, value: f64 },

    #[error("Result for '{result}' carries a threshold on '{threshold}'")]
    MismatchedVariable { result: String, threshold: String },
}

/// The operator codes used on the wire: `gt`, `lt`, `gte`, `lte`, `between`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Gt,
    Lt,
    Gte,
    Lte,
    Between,
}

impl OperatorKind {
    pub fn code(&self) -> &'static str {
        match self {
            OperatorKind::Gt => "gt",
            OperatorKind::Lt => "lt",
            OperatorKind::Gte => "gte",
            OperatorKind::Lte => "lte",
            OperatorKind::Between => "between",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A comparison together with its bound(s).
///
/// The set is closed: every variant has exactly the bounds it needs, so a
/// "between" without an upper bound cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    /// `value > bound`
    GreaterThan(f64),
    /// `value < bound`
    LessThan(f64),
    /// `value >= bound`
    GreaterOrEqual(f64),
    /// `value <= bound`
    LessOrEqual(f64),
    /// `low <= value <= high`, inclusive at both ends.
    Between { low: f64, high: f64 },
}

impl Operator {
    /// Builds an operator from its wire code and raw bounds.
    ///
    /// `value2` must be present for [`OperatorKind::Between`] and absent otherwise.
    pub fn from_parts(
        variable: &str,
        kind: OperatorKind,
        value: f64,
        value2: Option<f64>,
    ) -> Result<Self, ThresholdError> {
        let operator = match (kind, value2) {
            (OperatorKind::Between, Some(high)) => Operator::Between { low: value, high },
            (OperatorKind::Between, None) => {
                return Err(ThresholdError::MissingUpperBound {
                    variable: variable.to_string(),
                })
            }
            (operator, Some(value2)) => {
                return Err(ThresholdError::UnexpectedUpperBound {
                    variable: variable.to_string(),
                    operator,
                    value2,
                })
            }
            (OperatorKind::Gt, None) => Operator::GreaterThan(value),
            (OperatorKind::Lt, None) => Operator::LessThan(value),
            (OperatorKind::Gte, None) => Operator::GreaterOrEqual(value),
            (OperatorKind::Lte, None) => Operator::LessOrEqual(value),
        };
        operator.validate(variable)?;
        Ok(operator)
    }

    /// Checks that every bound is finite and that a range is not inverted.
    pub fn validate(&self, variable: &str) -> Result<(), ThresholdError> {
        let (low, high) = self.bounds();
        for bound in std::iter::once(low).chain(high) {
            if !bound.is_finite() {
                return Err(ThresholdError::NonFiniteBound {
                    variable: variable.to_string(),
                    value: bound,
                });
            }
        }
        if let Operator::Between { low, high } = *self {
            if low > high {
                return Err(ThresholdError::InvertedBounds {
                    variable: variable.to_string(),
                    low,
                    high,
                });
            }
        }
        Ok(())
    }

    /// Evaluates the predicate against one value.
    pub fn test(&self, value: f64) -> bool {
        match *self {
            Operator::GreaterThan(bound) => value > bound,
            Operator::LessThan(bound) => value < bound,
            Operator::GreaterOrEqual(bound) => value >= bound,
            Operator::LessOrEqual(bound) => value <= bound,
            Operator::Between { low, high } => low <= value && value <= high,
        }
    }

    pub fn kind(&self) -> OperatorKind {
        match self {
            Operator::GreaterThan(_) => OperatorKind::Gt,
            Operator::LessThan(_) => OperatorKind::Lt,
            Operator::GreaterOrEqual(_) => OperatorKind::Gte,
            Operator::LessOrEqual(_) => OperatorKind::Lte,
            Operator::Between { .. } => OperatorKind::Between,
        }
    }

    /// The primary bound and, for ranges, the upper bound.
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match *self {
            Operator::GreaterThan(bound)
            | Operator::LessThan(bound)
            | Operator::GreaterOrEqual(bound)
            | Operator::LessOrEqual(bound) => (bound, None),
            Operator::Between { low, high } => (low, Some(high)),
        }
    }
}

/// A validated predicate over one named weather variable.
///
/// Built through [`Threshold::new`] (which checks the variable id against a
/// [`VariableRegistry`]) or deserialized from the wire format
/// `{"variableId", "operator", "value", "value2"?, "label"?}`, which checks
/// the bounds. Deserialization cannot see a registry, so the variable id of a
/// deserialized threshold should be checked with [`Threshold::validate`]
/// before it reaches the engine.
///
/// # Examples
///
/// ```
/// use weather_odds::{Operator, Threshold, VariableRegistry};
///
/// let registry = VariableRegistry::builtin();
/// let hot = Threshold::new(&registry, "temperature", Operator::GreaterThan(35.0))?
///     .with_label("Very hot days");
/// assert_eq!(hot.describe(&registry), "Very hot days");
///
/// assert!(Threshold::new(&registry, "humidity", Operator::LessThan(40.0)).is_err());
/// # Ok::<(), weather_odds::ThresholdError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdRecord", into = "ThresholdRecord")]
pub struct Threshold {
    variable_id: String,
    operator: Operator,
    label: Option<String>,
}

impl Threshold {
    /// Creates a threshold on a registered variable.
    ///
    /// # Errors
    ///
    /// [`ThresholdError::UnknownVariable`] if `variable_id` is not in `registry`,
    /// or a bound error if `operator` has non-finite or inverted bounds.
    pub fn new(
        registry: &VariableRegistry,
        variable_id: impl Into<String>,
        operator: Operator,
    ) -> Result<Self, ThresholdError> {
        let threshold = Self {
            variable_id: variable_id.into(),
            operator,
            label: None,
        };
        threshold.validate(registry)?;
        Ok(threshold)
    }

    /// Creates a threshold from the raw wire representation.
    pub fn from_parts(
        registry: &VariableRegistry,
        variable_id: impl Into<String>,
        kind: OperatorKind,
        value: f64,
        value2: Option<f64>,
    ) -> Result<Self, ThresholdError> {
        let variable_id = variable_id.into();
        let operator = Operator::from_parts(&variable_id, kind, value, value2)?;
        Self::new(registry, variable_id, operator)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Checks the variable id against `registry` and re-checks the bounds.
    pub fn validate(&self, registry: &VariableRegistry) -> Result<(), ThresholdError> {
        if !registry.contains(&self.variable_id) {
            return Err(ThresholdError::UnknownVariable(self.variable_id.clone()));
        }
        self.operator.validate(&self.variable_id)
    }

    pub fn variable_id(&self) -> &str {
        &self.variable_id
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The label if one was given, otherwise a condition synthesized from the
    /// variable name, operator and unit, e.g. `"Temperature > 35°C"` or
    /// `"Cloud Cover between 30-70%"`.
    pub fn describe(&self, registry: &VariableRegistry) -> String {
        if let Some(label) = self.label.as_deref().filter(|label| !label.is_empty()) {
            return label.to_string();
        }
        let variable = registry.get(&self.variable_id);
        let name = variable.map(|v| v.name).unwrap_or(self.variable_id.as_str());
        let unit = variable.map(|v| v.unit).unwrap_or("");
        match self.operator {
            Operator::GreaterThan(bound) => format!("{name} > {bound}{unit}"),
            Operator::LessThan(bound) => format!("{name} < {bound}{unit}"),
            Operator::GreaterOrEqual(bound) => format!("{name} ≥ {bound}{unit}"),
            Operator::LessOrEqual(bound) => format!("{name} ≤ {bound}{unit}"),
            Operator::Between { low, high } => format!("{name} between {low}-{high}{unit}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThresholdRecord {
    variable_id: String,
    operator: OperatorKind,
    value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl TryFrom<ThresholdRecord> for Threshold {
    type Error = ThresholdError;

    fn try_from(record: ThresholdRecord) -> Result<Self, Self::Error> {
        let operator = Operator::from_parts(
            &record.variable_id,
            record.operator,
            record.value,
            record.value2,
        )?;
        Ok(Threshold {
            variable_id: record.variable_id,
            operator,
            label: record.label,
        })
    }
}

impl From<Threshold> for ThresholdRecord {
    fn from(threshold: Threshold) -> Self {
        let (value, value2) = threshold.operator.bounds();
        ThresholdRecord {
            variable_id: threshold.variable_id,
            operator: threshold.operator.kind(),
            value,
            value2,
            label: threshold.label,
        }
    }
}
