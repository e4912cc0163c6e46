//! Contains the `SeriesFrame` structure for lazy Polars operations on a historical series.

use crate::types::series::HistoricalSeries;
use crate::types::threshold::{Operator, Threshold};
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::period::date_period::DatePeriod;
use crate::types::variable::VariableRegistry;
use crate::WeatherOddsError;
use chrono::NaiveDate;
use polars::prelude::{col, lit, Column, DataFrame, Expr, IntoLazy, LazyFrame, PolarsResult};

/// A wrapper around a Polars `LazyFrame` holding the observations of a [`HistoricalSeries`].
///
/// The frame has a `date` column of type `Date` followed by one `f64` column
/// per registered variable, named by variable id (`temperature`, `rainfall`,
/// `dustConcentration`, ...). Rows keep the order of the series.
///
/// Instances are typically obtained via [`crate::WeatherOdds::frame`].
///
/// # Errors
///
/// Operations that trigger computation on the underlying `LazyFrame` (e.g. calling `.collect()`)
/// can return a [`polars::prelude::PolarsError`]. Methods resolving dates (`get_range`,
/// `get_at`, `get_for_period`) return [`WeatherOddsError::DateParsingError`] if an input
/// cannot be resolved.
#[derive(Clone)]
pub struct SeriesFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl SeriesFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Builds the frame from a series, one column per variable in `registry`.
    pub fn from_series(
        series: &HistoricalSeries,
        registry: &VariableRegistry,
    ) -> Result<SeriesFrame, WeatherOddsError> {
        Ok(SeriesFrame::new(series_dataframe(series, registry)?.lazy()))
    }

    /// Filters the rows on an arbitrary Polars predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use weather_odds::{DateRange, LatLon, Location, SyntheticProvider, WeatherOdds};
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let location = Location::new("Mumbai, India", LatLon(19.0760, 72.8777));
    /// # let range = DateRange::between("2024-06-01", "2024-06-30")?;
    /// # let series = SyntheticProvider::builder().seed(3).build().generate(&location, &range)?;
    /// let frame = WeatherOdds::new().frame(&series)?;
    /// let wet_days = frame.filter(col("rainfall").gt(lit(10.0f64))).frame.collect()?;
    /// println!("{} wet days", wet_days.height());
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> SeriesFrame {
        SeriesFrame::new(self.frame.clone().filter(predicate))
    }

    /// Rows dated within `start..=end`. The first day of `start` and the last
    /// day of `end` are used, so `get_range(Year(2019), Year(2020))` keeps both years.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<SeriesFrame, WeatherOddsError> {
        let start_naive = start
            .resolve()
            .ok_or(WeatherOddsError::DateParsingError)?
            .first;
        let end_naive = end
            .resolve()
            .ok_or(WeatherOddsError::DateParsingError)?
            .last;

        Ok(self.filter(
            col("date")
                .gt_eq(lit(start_naive))
                .and(col("date").lt_eq(lit(end_naive))),
        ))
    }

    /// Rows dated on the first day `date` resolves to.
    pub fn get_at(&self, date: impl AnyDate) -> Result<SeriesFrame, WeatherOddsError> {
        let naive_date = date
            .resolve()
            .ok_or(WeatherOddsError::DateParsingError)?
            .first;
        Ok(self.filter(col("date").eq(lit(naive_date))))
    }

    /// Rows within a whole period such as a [`crate::Year`] or [`crate::Month`].
    pub fn get_for_period(&self, period: impl DatePeriod) -> Result<SeriesFrame, WeatherOddsError> {
        let date_period = period
            .day_span()
            .ok_or(WeatherOddsError::DateParsingError)?;
        self.get_range(date_period.first, date_period.last)
    }

    /// Rows satisfying `threshold`, evaluated by Polars.
    ///
    /// Gives the same rows as [`crate::ThresholdEvaluator::matches`]. A
    /// threshold on a variable with no column fails on collect.
    pub fn matching(&self, threshold: &Threshold) -> SeriesFrame {
        self.filter(threshold_expr(threshold))
    }

    /// Collects one variable column into plain values.
    pub fn variable_values(&self, variable_id: &str) -> Result<Vec<f64>, WeatherOddsError> {
        let df = self.frame.clone().select([col(variable_id)]).collect()?;
        let values = df
            .column(variable_id)?
            .f64()?
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect();
        Ok(values)
    }

    /// Collects the `date` column.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, WeatherOddsError> {
        let df = self.frame.clone().select([col("date")]).collect()?;
        let dates = df.column("date")?.date()?.as_date_iter().flatten().collect();
        Ok(dates)
    }
}

pub(crate) fn series_dataframe(
    series: &HistoricalSeries,
    registry: &VariableRegistry,
) -> PolarsResult<DataFrame> {
    let observations = series.observations();
    let dates: Vec<NaiveDate> = observations.iter().map(|o| o.date).collect();

    let mut columns = Vec::with_capacity(registry.len() + 1);
    columns.push(Column::new("date".into(), dates));
    for variable in registry.iter() {
        let values: Vec<f64> = observations.iter().map(|o| variable.value(o)).collect();
        columns.push(Column::new(variable.id.into(), values));
    }
    DataFrame::new(columns)
}

fn threshold_expr(threshold: &Threshold) -> Expr {
    let value = col(threshold.variable_id());
    match threshold.operator() {
        Operator::GreaterThan(bound) => value.gt(lit(bound)),
        Operator::LessThan(bound) => value.lt(lit(bound)),
        Operator::GreaterOrEqual(bound) => value.gt_eq(lit(bound)),
        Operator::LessOrEqual(bound) => value.lt_eq(lit(bound)),
        Operator::Between { low, high } => value
            .clone()
            .gt_eq(lit(low))
            .and(value.lt_eq(lit(high))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::ThresholdEvaluator;
    use crate::types::date_range::DateRange;
    use crate::types::location::{LatLon, Location};
    use crate::types::observation::Observation;
    use crate::{Month, Year};
    use chrono::Duration;
    use polars::prelude::{DataType, PlSmallStr};

    fn get_test_series() -> HistoricalSeries {
        let start = NaiveDate::from_ymd_opt(2019, 12, 20).unwrap();
        let data = (0..20)
            .map(|i| Observation {
                date: start + Duration::days(i),
                temperature: -5.0 + i as f64,
                temperature_min: -9.0 + i as f64,
                temperature_max: -1.0 + i as f64,
                rainfall: if i % 4 == 0 { 6.5 } else { 0.0 },
                windspeed: 3.0 + (i % 3) as f64,
                snowfall: if i < 5 { 2.0 } else { 0.0 },
                dust_concentration: 15.0,
                cloud_cover: 50.0,
            })
            .collect();
        HistoricalSeries::new(
            Location::new("Oslo, Norway", LatLon(59.9139, 10.7522)),
            DateRange::between("2024-12-20", "2025-01-08").unwrap(),
            data,
            "test",
        )
    }

    fn get_test_frame() -> Result<SeriesFrame, WeatherOddsError> {
        SeriesFrame::from_series(&get_test_series(), &VariableRegistry::builtin())
    }

    #[test]
    fn test_frame_schema() -> Result<(), Box<dyn std::error::Error>> {
        let df = get_test_frame()?.frame.collect()?;
        let actual_cols = df.get_column_names();

        for col_name in ["date", "temperature", "rainfall", "dustConcentration", "temperatureMax"] {
            assert!(
                actual_cols.contains(&&PlSmallStr::from_str(col_name)),
                "Expected column '{}' not found",
                col_name
            );
        }
        assert_eq!(df.column("date")?.dtype(), &DataType::Date);
        assert_eq!(df.height(), 20);
        Ok(())
    }

    #[test]
    fn test_get_for_period_splits_years() -> Result<(), Box<dyn std::error::Error>> {
        let frame = get_test_frame()?;
        assert_eq!(frame.get_for_period(Year(2019))?.dates()?.len(), 12);
        assert_eq!(frame.get_for_period(Month(2020, 1))?.dates()?.len(), 8);
        assert_eq!(frame.get_range("2019-12-30", "2020-01-02")?.dates()?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_get_at_specific_date() -> Result<(), Box<dyn std::error::Error>> {
        let frame = get_test_frame()?;
        let target = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        let single = frame.get_at(target)?;

        assert_eq!(single.dates()?, vec![target]);
        assert_eq!(single.variable_values("temperature")?, vec![7.0]);
        assert!(matches!(
            frame.get_at("01/01/2020"),
            Err(WeatherOddsError::DateParsingError)
        ));
        Ok(())
    }

    #[test]
    fn test_matching_agrees_with_evaluator() -> Result<(), Box<dyn std::error::Error>> {
        let registry = VariableRegistry::builtin();
        let series = get_test_series();
        let frame = SeriesFrame::from_series(&series, &registry)?;
        let evaluator = ThresholdEvaluator::new(&registry);

        let thresholds = [
            Threshold::new(&registry, "temperature", Operator::Between { low: 0.0, high: 5.0 })?,
            Threshold::new(&registry, "rainfall", Operator::GreaterThan(5.0))?,
            Threshold::new(&registry, "windspeed", Operator::LessOrEqual(4.0))?,
        ];
        for threshold in &thresholds {
            let expected = evaluator.count_matches(series.observations(), threshold);
            let rows = frame.matching(threshold).frame.collect()?.height();
            assert_eq!(rows, expected, "{}", threshold.describe(&registry));
        }
        Ok(())
    }
}
