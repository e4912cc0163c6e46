//! This module provides the main entry point of the crate, [`WeatherOdds`].
//!
//! The engine is a set of pure functions over a historical series and a list
//! of thresholds. `WeatherOdds` binds them to a [`VariableRegistry`] so that
//! callers do not have to thread the registry through every call.

pub(crate) mod analysis;
pub mod error;
pub(crate) mod probability;
pub(crate) mod risk;
pub mod statistics;
pub(crate) mod summary;

use crate::engine::error::StatisticsError;
use crate::engine::statistics::{DescriptiveStatistics, Distribution, DEFAULT_BIN_COUNT};
use crate::error::WeatherOddsError;
use crate::evaluator::ThresholdEvaluator;
use crate::frame::SeriesFrame;
use crate::provider::HistoricalDataProvider;
use crate::types::analysis::{ProbabilityResult, WeatherAnalysis};
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::observation::Observation;
use crate::types::series::HistoricalSeries;
use crate::types::threshold::{Operator, Threshold, ThresholdError};
use crate::types::variable::VariableRegistry;
use bon::bon;
use chrono::{DateTime, Utc};

/// The probability/risk engine.
///
/// Holds nothing but the variable registry, so a single instance can be
/// shared freely between threads and concurrent requests. Every operation is
/// a deterministic function of its arguments (apart from the timestamp
/// stamped by [`WeatherOdds::build_analysis`]).
///
/// # Examples
///
/// ```rust
/// use weather_odds::{DateRange, LatLon, Location, Operator, SyntheticProvider, WeatherOdds};
/// # use weather_odds::WeatherOddsError;
/// # fn run() -> Result<(), WeatherOddsError> {
/// let odds = WeatherOdds::new();
/// let location = Location::new("Cairo, Egypt", LatLon(30.0444, 31.2357));
/// let week = DateRange::between("2024-07-01", "2024-07-07")?;
///
/// let provider = SyntheticProvider::builder().seed(7).years_of_history(10).build();
/// let series = provider.generate(&location, &week)?;
///
/// let thresholds = vec![
///     odds.threshold("temperature", Operator::GreaterThan(35.0))?,
///     odds.threshold("dustConcentration", Operator::GreaterOrEqual(100.0))?,
/// ];
/// let analysis = odds.build_analysis(&location, &week, &series, &thresholds);
///
/// assert_eq!(analysis.probabilities().len(), 2);
/// assert!((0.0..=100.0).contains(&analysis.risk_score()));
/// println!("{}", analysis.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeatherOdds {
    registry: VariableRegistry,
}

#[bon]
impl WeatherOdds {
    /// Creates an engine over the built-in variables.
    pub fn new() -> Self {
        Self::with_registry(VariableRegistry::builtin())
    }

    /// Creates an engine over a custom set of variables.
    pub fn with_registry(registry: VariableRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Builds a threshold on one of this engine's variables.
    ///
    /// # Errors
    ///
    /// See [`Threshold::new`].
    pub fn threshold(
        &self,
        variable_id: impl Into<String>,
        operator: Operator,
    ) -> Result<Threshold, ThresholdError> {
        Threshold::new(&self.registry, variable_id, operator)
    }

    /// Checks every threshold against this engine's registry, failing on the first invalid one.
    pub fn validate_thresholds(&self, thresholds: &[Threshold]) -> Result<(), ThresholdError> {
        thresholds
            .iter()
            .try_for_each(|threshold| threshold.validate(&self.registry))
    }

    /// Whether `observation` satisfies `threshold`.
    pub fn matches(&self, observation: &Observation, threshold: &Threshold) -> bool {
        ThresholdEvaluator::new(&self.registry).matches(observation, threshold)
    }

    /// One [`ProbabilityResult`] per threshold, in threshold order.
    ///
    /// An empty series is not an error: every probability is then 0.
    pub fn compute_probabilities(
        &self,
        series: &HistoricalSeries,
        thresholds: &[Threshold],
    ) -> Vec<ProbabilityResult> {
        probability::compute_probabilities(&self.registry, series, thresholds)
    }

    /// Weighted mean of the result probabilities in `[0, 100]`, one decimal.
    /// No results gives 0.
    pub fn compute_risk_score(&self, results: &[ProbabilityResult]) -> f64 {
        risk::compute_risk_score(&self.registry, results)
    }

    /// A one or two sentence summary of `results` for `location`.
    pub fn generate_summary(
        &self,
        location: &Location,
        date_range: &DateRange,
        results: &[ProbabilityResult],
        risk_score: f64,
    ) -> String {
        summary::generate_summary(location, date_range, results, risk_score)
    }

    /// Mean, median, standard deviation, extremes and percentiles of one variable.
    ///
    /// # Errors
    ///
    /// [`StatisticsError::EmptySeries`] for an empty series,
    /// [`StatisticsError::UnknownVariable`] for an unregistered variable and
    /// [`StatisticsError::NonFiniteValues`] if the series holds NaN or infinities.
    pub fn compute_statistics(
        &self,
        series: &HistoricalSeries,
        variable_id: &str,
    ) -> Result<DescriptiveStatistics, StatisticsError> {
        statistics::compute_statistics(&self.registry, series, variable_id)
    }

    /// Equal-width histogram of one variable, for distribution charts.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.series(&HistoricalSeries)`: **Required.**
    /// * `.variable_id(&str)`: **Required.**
    /// * `.bin_count(usize)`: Optional. Defaults to `15`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use weather_odds::{DateRange, LatLon, Location, SyntheticProvider, WeatherOdds, WeatherOddsError};
    /// # fn run() -> Result<(), WeatherOddsError> {
    /// # let location = Location::new("Paris, France", LatLon(48.8566, 2.3522));
    /// # let range = DateRange::between("2024-01-01", "2024-01-31")?;
    /// # let series = SyntheticProvider::builder().seed(1).build().generate(&location, &range)?;
    /// let odds = WeatherOdds::new();
    /// let distribution = odds
    ///     .distribution()
    ///     .series(&series)
    ///     .variable_id("temperature")
    ///     .bin_count(10)
    ///     .call()?;
    /// assert_eq!(distribution.bins.len(), 10);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn distribution(
        &self,
        series: &HistoricalSeries,
        variable_id: &str,
        bin_count: Option<usize>,
    ) -> Result<Distribution, StatisticsError> {
        statistics::compute_distribution(
            &self.registry,
            series,
            variable_id,
            bin_count.unwrap_or(DEFAULT_BIN_COUNT),
        )
    }

    /// Runs probabilities, risk score and summary over `series` and bundles
    /// them into a new [`WeatherAnalysis`] stamped with the current time.
    pub fn build_analysis(
        &self,
        location: &Location,
        date_range: &DateRange,
        series: &HistoricalSeries,
        thresholds: &[Threshold],
    ) -> WeatherAnalysis {
        self.build_analysis_at(location, date_range, series, thresholds, Utc::now())
    }

    /// Like [`WeatherOdds::build_analysis`], with an explicit generation timestamp.
    pub fn build_analysis_at(
        &self,
        location: &Location,
        date_range: &DateRange,
        series: &HistoricalSeries,
        thresholds: &[Threshold],
        generated_at: DateTime<Utc>,
    ) -> WeatherAnalysis {
        analysis::build_analysis(
            &self.registry,
            location,
            date_range,
            series,
            thresholds,
            generated_at,
        )
    }

    /// Validates `thresholds`, fetches the series from `provider` and builds the analysis.
    ///
    /// # Errors
    ///
    /// [`WeatherOddsError::Threshold`] if a threshold is invalid (checked
    /// before the provider is called) and [`WeatherOddsError::Provider`] if
    /// fetching fails.
    pub async fn analyze<P: HistoricalDataProvider>(
        &self,
        provider: &P,
        location: &Location,
        date_range: &DateRange,
        thresholds: &[Threshold],
    ) -> Result<WeatherAnalysis, WeatherOddsError> {
        self.validate_thresholds(thresholds)?;
        let series = provider.fetch_series(location, date_range).await?;
        Ok(self.build_analysis(location, date_range, &series, thresholds))
    }

    /// A Polars view of `series` with one column per registered variable.
    pub fn frame(&self, series: &HistoricalSeries) -> Result<SeriesFrame, WeatherOddsError> {
        SeriesFrame::from_series(series, &self.registry)
    }
}
