use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar year, usable wherever an [`AnyDate`](crate::AnyDate) or
/// [`DatePeriod`](crate::DatePeriod) is accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A calendar month of a specific year: `Month(year, month)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);
impl Month {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// First and last day of a resolved date or period, both inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DaySpan {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DaySpan {
    pub(crate) fn single(day: NaiveDate) -> Self {
        Self {
            first: day,
            last: day,
        }
    }
}
