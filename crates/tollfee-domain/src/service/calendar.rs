//! Toll-free date predicates

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Decides whether passages on a given date are free of charge.
///
/// Implementations must be pure; the engine may call them from many threads.
pub trait TollFreeCalendar: Send + Sync {
    fn is_toll_free(&self, date: NaiveDate) -> bool;
}

impl<F> TollFreeCalendar for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_toll_free(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Fixed set of toll-free dates, optionally including every weekend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayList {
    dates: BTreeSet<NaiveDate>,
    weekends: bool,
}

impl HolidayList {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            weekends: false,
        }
    }

    pub fn with_weekends(mut self, weekends: bool) -> Self {
        self.weekends = weekends;
        self
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

impl TollFreeCalendar for HolidayList {
    fn is_toll_free(&self, date: NaiveDate) -> bool {
        (self.weekends && is_weekend(date)) || self.dates.contains(&date)
    }
}
