//! Ready-made threshold sets for common outdoor activities.

use crate::types::threshold::{OperatorKind, Threshold, ThresholdError};
use crate::types::variable::VariableRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An outdoor activity with a preset list of favorable conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Hiking,
    Beach,
    Skiing,
    Camping,
    Festival,
    Fishing,
    Cycling,
    Photography,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown activity '{0}'")]
pub struct UnknownActivity(pub String);

/// (variable id, operator, value, value2, label)
type PresetCondition = (&'static str, OperatorKind, f64, Option<f64>, &'static str);

impl Activity {
    pub const ALL: [Activity; 8] = [
        Activity::Hiking,
        Activity::Beach,
        Activity::Skiing,
        Activity::Camping,
        Activity::Festival,
        Activity::Fishing,
        Activity::Cycling,
        Activity::Photography,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Activity::Hiking => "hiking",
            Activity::Beach => "beach",
            Activity::Skiing => "skiing",
            Activity::Camping => "camping",
            Activity::Festival => "festival",
            Activity::Fishing => "fishing",
            Activity::Cycling => "cycling",
            Activity::Photography => "photography",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activity::Hiking => "Hiking",
            Activity::Beach => "Beach Day",
            Activity::Skiing => "Ski Trip",
            Activity::Camping => "Camping",
            Activity::Festival => "Outdoor Festival",
            Activity::Fishing => "Fishing",
            Activity::Cycling => "Cycling",
            Activity::Photography => "Photography",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Activity::Hiking => "Ideal conditions for day hikes and trail walks",
            Activity::Beach => "Perfect weather for sunbathing and swimming",
            Activity::Skiing => "Optimal snow conditions for skiing and snowboarding",
            Activity::Camping => "Comfortable conditions for outdoor camping",
            Activity::Festival => "Pleasant weather for outdoor events and concerts",
            Activity::Fishing => "Calm conditions ideal for fishing",
            Activity::Cycling => "Great weather for road cycling and biking",
            Activity::Photography => "Interesting weather conditions for outdoor photography",
        }
    }

    fn conditions(&self) -> [PresetCondition; 3] {
        use OperatorKind::{Between, Gte, Lt};
        match self {
            Activity::Hiking => [
                ("temperature", Between, 15.0, Some(28.0), "Comfortable temperature (15-28°C)"),
                ("rainfall", Lt, 5.0, None, "Low rainfall (<5mm)"),
                ("windspeed", Lt, 10.0, None, "Moderate wind (<10m/s)"),
            ],
            Activity::Beach => [
                ("temperature", Gte, 25.0, None, "Warm weather (≥25°C)"),
                ("rainfall", Lt, 2.0, None, "Very low rainfall (<2mm)"),
                ("cloudCover", Lt, 40.0, None, "Mostly sunny (<40% cloud)"),
            ],
            Activity::Skiing => [
                ("temperature", Between, -10.0, Some(5.0), "Cold for snow (-10 to 5°C)"),
                ("snowfall", Gte, 10.0, None, "Good snow depth (≥10cm)"),
                ("windspeed", Lt, 15.0, None, "Safe wind conditions (<15m/s)"),
            ],
            Activity::Camping => [
                ("temperature", Between, 12.0, Some(30.0), "Moderate temperature (12-30°C)"),
                ("rainfall", Lt, 8.0, None, "Minimal rain (<8mm)"),
                ("windspeed", Lt, 10.0, None, "Light wind (<10m/s)"),
            ],
            Activity::Festival => [
                ("temperature", Between, 18.0, Some(32.0), "Pleasant temperature (18-32°C)"),
                ("rainfall", Lt, 10.0, None, "Low rainfall (<10mm)"),
                ("windspeed", Lt, 12.0, None, "Manageable wind (<12m/s)"),
            ],
            Activity::Fishing => [
                ("temperature", Between, 10.0, Some(30.0), "Comfortable range (10-30°C)"),
                ("windspeed", Lt, 8.0, None, "Calm conditions (<8m/s)"),
                ("rainfall", Lt, 15.0, None, "Moderate rainfall (<15mm)"),
            ],
            Activity::Cycling => [
                ("temperature", Between, 15.0, Some(28.0), "Comfortable temperature (15-28°C)"),
                ("rainfall", Lt, 3.0, None, "Dry conditions (<3mm)"),
                ("windspeed", Lt, 12.0, None, "Manageable wind (<12m/s)"),
            ],
            Activity::Photography => [
                ("temperature", Between, 10.0, Some(30.0), "Comfortable for equipment (10-30°C)"),
                ("cloudCover", Between, 30.0, Some(70.0), "Interesting clouds (30-70%)"),
                ("rainfall", Lt, 5.0, None, "Equipment safe (<5mm)"),
            ],
        }
    }

    /// The activity's conditions as labelled thresholds, validated against `registry`.
    ///
    /// Fails only if `registry` lacks one of the built-in variables the preset uses.
    pub fn thresholds(&self, registry: &VariableRegistry) -> Result<Vec<Threshold>, ThresholdError> {
        self.conditions()
            .into_iter()
            .map(|(variable_id, kind, value, value2, label)| {
                Threshold::from_parts(registry, variable_id, kind, value, value2)
                    .map(|threshold| threshold.with_label(label))
            })
            .collect()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activity {
    type Err = UnknownActivity;

    /// Parses an activity id such as `"hiking"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|activity| activity.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::threshold::Operator;

    #[test]
    fn test_every_preset_is_valid() -> Result<(), ThresholdError> {
        let registry = VariableRegistry::builtin();
        for activity in Activity::ALL {
            let thresholds = activity.thresholds(&registry)?;
            assert_eq!(thresholds.len(), 3, "{activity}");
            assert!(thresholds.iter().all(|t| t.label().is_some()));
        }
        Ok(())
    }

    #[test]
    fn test_skiing_preset() -> Result<(), ThresholdError> {
        let registry = VariableRegistry::builtin();
        let thresholds = Activity::Skiing.thresholds(&registry)?;

        assert_eq!(thresholds[0].variable_id(), "temperature");
        assert_eq!(
            thresholds[0].operator(),
            Operator::Between {
                low: -10.0,
                high: 5.0
            }
        );
        assert_eq!(thresholds[1].operator(), Operator::GreaterOrEqual(10.0));
        assert_eq!(thresholds[1].describe(&registry), "Good snow depth (≥10cm)");
        Ok(())
    }

    #[test]
    fn test_registry_without_cloud_cover_rejects_beach() {
        let mut registry = VariableRegistry::empty();
        for id in ["temperature", "rainfall"] {
            if let Some(variable) = VariableRegistry::builtin().get(id) {
                registry.register(variable.clone());
            }
        }
        assert_eq!(
            Activity::Beach.thresholds(&registry),
            Err(ThresholdError::UnknownVariable("cloudCover".to_string()))
        );
        assert!(Activity::Hiking.thresholds(&registry).is_err());
    }

    #[test]
    fn test_parse_activity() {
        assert_eq!("Hiking".parse::<Activity>(), Ok(Activity::Hiking));
        assert_eq!(" beach ".parse::<Activity>(), Ok(Activity::Beach));
        assert_eq!(
            "surfing".parse::<Activity>(),
            Err(UnknownActivity("surfing".to_string()))
        );
        assert_eq!(Activity::Festival.to_string(), "Outdoor Festival");
    }
}
