//! The inclusive calendar window a query and its historical series cover.

use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::period::date_period::DatePeriod;
use crate::types::traits::utils::clamped_ymd;
use crate::WeatherOddsError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days, `start..=end`.
///
/// Constructors guarantee `start <= end`. Serializes as
/// `{"startDate": "YYYY-MM-DD", "endDate": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRecord")]
pub struct DateRange {
    #[serde(rename = "startDate")]
    start: NaiveDate,
    #[serde(rename = "endDate")]
    end: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DateRangeRecord {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<DateRangeRecord> for DateRange {
    type Error = WeatherOddsError;

    fn try_from(record: DateRangeRecord) -> Result<Self, Self::Error> {
        DateRange::new(record.start_date, record.end_date)
    }
}

impl DateRange {
    /// Creates a range from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherOddsError::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WeatherOddsError> {
        if start > end {
            return Err(WeatherOddsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from anything implementing [`AnyDate`].
    ///
    /// The first day of `start` and the last day of `end` are used, so
    /// `DateRange::between(Month(2023, 6), Month(2023, 8))` covers the whole summer.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherOddsError::DateParsingError`] if either bound cannot be
    /// resolved, or [`WeatherOddsError::InvalidDateRange`] if the bounds are inverted.
    pub fn between(start: impl AnyDate, end: impl AnyDate) -> Result<Self, WeatherOddsError> {
        let start = start
            .resolve()
            .ok_or(WeatherOddsError::DateParsingError)?
            .first;
        let end = end
            .resolve()
            .ok_or(WeatherOddsError::DateParsingError)?
            .last;
        Self::new(start, end)
    }

    /// Creates a range covering a whole period such as a [`crate::Year`].
    pub fn for_period(period: impl DatePeriod) -> Result<Self, WeatherOddsError> {
        let period = period
            .day_span()
            .ok_or(WeatherOddsError::DateParsingError)?;
        Self::new(period.first, period.last)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the month and day of `date` fall inside this range's calendar
    /// window, ignoring the year. Windows crossing new year wrap around.
    ///
    /// The day is projected onto every year the range touches; Feb 29 becomes
    /// Feb 28 in years without it.
    pub fn covers_calendar_day(&self, date: NaiveDate) -> bool {
        (self.start.year()..=self.end.year())
            .filter_map(|year| clamped_ymd(year, date.month(), date.day()))
            .any(|projected| self.contains(projected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Month, Year};

    #[test]
    fn test_rejects_inverted_range() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(matches!(
            DateRange::new(start, end),
            Err(WeatherOddsError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_between_months_spans_full_months() -> Result<(), WeatherOddsError> {
        let summer = DateRange::between(Month(2023, 6), Month(2023, 8))?;
        assert_eq!(summer.start(), NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(summer.end(), NaiveDate::from_ymd_opt(2023, 8, 31).unwrap());
        assert_eq!(summer.num_days(), 92);
        Ok(())
    }

    #[test]
    fn test_between_strings_and_periods() -> Result<(), WeatherOddsError> {
        let week = DateRange::between("2024-07-01", "2024-07-07")?;
        assert_eq!(week.num_days(), 7);
        assert!(week.contains(NaiveDate::from_ymd_opt(2024, 7, 7).unwrap()));
        assert!(!week.contains(NaiveDate::from_ymd_opt(2024, 7, 8).unwrap()));

        assert!(matches!(
            DateRange::between("not a date", "2024-07-07"),
            Err(WeatherOddsError::DateParsingError)
        ));
        assert_eq!(DateRange::for_period(Year(2024))?.num_days(), 366);
        Ok(())
    }

    #[test]
    fn test_serializes_as_start_and_end_date() -> Result<(), Box<dyn std::error::Error>> {
        let week = DateRange::between("2024-07-01", "2024-07-07")?;
        let json = serde_json::to_string(&week)?;
        assert_eq!(json, r#"{"startDate":"2024-07-01","endDate":"2024-07-07"}"#);
        assert_eq!(serde_json::from_str::<DateRange>(&json)?, week);

        let inverted = r#"{"startDate":"2024-07-07","endDate":"2024-07-01"}"#;
        assert!(serde_json::from_str::<DateRange>(inverted).is_err());
        Ok(())
    }

    #[test]
    fn test_calendar_window_wraps_new_year() -> Result<(), WeatherOddsError> {
        let holidays = DateRange::between("2024-12-20", "2025-01-05")?;
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert!(holidays.covers_calendar_day(date(1999, 12, 31)));
        assert!(holidays.covers_calendar_day(date(2010, 1, 5)));
        assert!(!holidays.covers_calendar_day(date(2010, 1, 6)));
        assert!(!holidays.covers_calendar_day(date(2010, 7, 1)));

        let july = DateRange::for_period(Month(2024, 7))?;
        assert!(july.covers_calendar_day(date(2003, 7, 31)));
        assert!(!july.covers_calendar_day(date(2003, 8, 1)));
        Ok(())
    }

    #[test]
    fn test_leap_year_range_one_day_short_misses_new_years_eve() -> Result<(), WeatherOddsError> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let almost_2024 = DateRange::between("2024-01-01", "2024-12-30")?;
        assert_eq!(almost_2024.num_days(), 365);
        assert!(!almost_2024.covers_calendar_day(date(2019, 12, 31)));
        assert!(almost_2024.covers_calendar_day(date(2019, 12, 30)));
        assert!(almost_2024.covers_calendar_day(date(2020, 2, 29)));

        let full_year = DateRange::for_period(Year(2023))?;
        assert!(full_year.covers_calendar_day(date(2019, 12, 31)));
        assert!(full_year.covers_calendar_day(date(2020, 2, 29)));

        let spanning = DateRange::between("2023-07-01", "2024-06-30")?;
        assert!(spanning.covers_calendar_day(date(2001, 1, 1)));
        assert!(spanning.covers_calendar_day(date(2001, 12, 31)));
        Ok(())
    }
}
