use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::types::{DaySpan, Month, Year};

/// A named period of whole days, such as a year or a month of a year.
pub trait DatePeriod {
    fn day_span(self) -> Option<DaySpan>;
}

impl DatePeriod for Year {
    fn day_span(self) -> Option<DaySpan> {
        self.resolve()
    }
}

impl DatePeriod for Month {
    fn day_span(self) -> Option<DaySpan> {
        self.resolve()
    }
}
