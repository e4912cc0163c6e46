use crate::types::traits::types::{DaySpan, Month, Year};
use crate::types::traits::utils::days_in_month;
use chrono::NaiveDate;

/// Anything that resolves to an inclusive span of calendar days.
///
/// A single [`NaiveDate`] (or a `"YYYY-MM-DD"` string) resolves to a one-day
/// span; a [`Year`] or [`Month`] resolves to all of its days. Used by
/// [`crate::DateRange::between`] and [`crate::SeriesFrame::get_range`], where the
/// start argument contributes its first day and the end argument its last.
pub trait AnyDate {
    fn resolve(self) -> Option<DaySpan>;
}

impl AnyDate for NaiveDate {
    fn resolve(self) -> Option<DaySpan> {
        Some(DaySpan::single(self))
    }
}

impl AnyDate for &str {
    fn resolve(self) -> Option<DaySpan> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d")
            .ok()
            .map(DaySpan::single)
    }
}

impl AnyDate for String {
    fn resolve(self) -> Option<DaySpan> {
        self.as_str().resolve()
    }
}

impl AnyDate for Year {
    fn resolve(self) -> Option<DaySpan> {
        Some(DaySpan {
            first: NaiveDate::from_yo_opt(self.0, 1)?,
            last: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for Month {
    fn resolve(self) -> Option<DaySpan> {
        let Month(year, month) = self;
        Some(DaySpan {
            first: NaiveDate::from_ymd_opt(year, month, 1)?,
            last: NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)?)?,
        })
    }
}
