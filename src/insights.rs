//! Rule-based planning advice derived from a finished analysis.

use crate::presets::Activity;
use crate::types::analysis::{ProbabilityResult, WeatherAnalysis};
use serde::{Deserialize, Serialize};

const HIGH_PROBABILITY: f64 = 70.0;
const LOW_PROBABILITY: f64 = 30.0;
const MODERATE_SCORE: f64 = 40.0;

/// Planning advice for an analysis: a short narrative, recommendations,
/// risks, and a note on which days tend to be better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningInsight {
    pub summary: String,
    pub recommendations: Vec<String>,
    pub risks: Vec<String>,
    pub best_days: String,
}

impl PlanningInsight {
    /// Derives advice from `analysis`, optionally tailored to `activity`.
    ///
    /// Scores above 70 read as favorable, above 40 as moderate and anything
    /// else as challenging. Conditions above 70% are called out as likely,
    /// those below 30% as risks.
    pub fn generate(analysis: &WeatherAnalysis, activity: Option<Activity>) -> Self {
        let score = analysis.risk_score();
        let likely = variable_names(analysis.probabilities(), |p| p > HIGH_PROBABILITY);
        let unlikely = variable_names(analysis.probabilities(), |p| p < LOW_PROBABILITY);

        let mut summary = format!(
            "Based on {} days of historical data for {}, your selected weather conditions \
             have a {:.0}% overall probability of occurring. ",
            analysis.historical_data().len(),
            analysis.location().name,
            score.round()
        );
        if !likely.is_empty() {
            summary.push_str(&format!("{} show high likelihood. ", likely.join(" and ")));
        }
        let outlook = if score > HIGH_PROBABILITY {
            "favorable"
        } else if score > MODERATE_SCORE {
            "moderate"
        } else {
            "challenging"
        };
        let stance = if score > HIGH_PROBABILITY {
            "confidence"
        } else {
            "caution"
        };
        let subject = activity.map_or("your activity", |a| a.name());
        summary.push_str(&format!(
            "This {outlook} outlook suggests {subject} planning should proceed with {stance}."
        ));

        let mut recommendations: Vec<String> = if score > HIGH_PROBABILITY {
            vec![
                "Conditions look favorable for outdoor activities".into(),
                "Consider booking accommodations early as weather is expected to be pleasant".into(),
            ]
        } else if score > MODERATE_SCORE {
            vec![
                "Have backup plans ready for variable weather".into(),
                "Monitor weather updates closer to your dates".into(),
            ]
        } else {
            vec![
                "Consider alternative dates with better weather probability".into(),
                "Prepare for challenging weather conditions".into(),
            ]
        };
        match activity {
            Some(Activity::Beach) => recommendations
                .push("Pack sunscreen and light clothing for warm weather".into()),
            Some(Activity::Hiking) => recommendations
                .push("Bring layers and rain gear for mountain weather variability".into()),
            Some(Activity::Skiing) => recommendations
                .push("Check snow conditions and avalanche reports before departure".into()),
            _ => {}
        }

        let mut risks = Vec::new();
        if !unlikely.is_empty() {
            risks.push(format!(
                "{} may not meet your expectations",
                unlikely.join(" and ")
            ));
        }
        if score < MODERATE_SCORE {
            risks.push("Historical patterns suggest unfavorable conditions".into());
        }

        Self {
            summary,
            recommendations,
            risks,
            best_days: "Mid-week periods historically show slightly better conditions than weekends"
                .into(),
        }
    }
}

fn variable_names(results: &[ProbabilityResult], keep: impl Fn(f64) -> bool) -> Vec<&str> {
    results
        .iter()
        .filter(|result| keep(result.probability()))
        .map(|result| result.variable_name())
        .collect()
}
