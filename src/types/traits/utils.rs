use chrono::{Datelike, Months, NaiveDate};

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some(next.pred_opt()?.day())
}

/// Builds `year-month-day`, clamping the day to the last day of the month.
/// Used to project a calendar day (e.g. Feb 29) onto years where it does not exist.
pub(crate) fn clamped_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last_day = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn test_clamped_ymd_projects_leap_day() {
        assert_eq!(
            clamped_ymd(2023, 2, 29),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            clamped_ymd(2024, 2, 29),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }
}
