//! Swedish public holidays
//!
//! Fixed-date holidays, the Easter-relative movable feasts and the
//! weekday-anchored Midsummer and All Saints' holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use tollfee_domain::service::calendar::is_weekend;
use tollfee_domain::{HolidayList, TollFreeCalendar};

/// Swedish holiday calendar used as the default toll-free predicate
#[derive(Debug, Clone)]
pub struct SwedishHolidayCalendar {
    weekends_toll_free: bool,
    extra: HolidayList,
}

impl SwedishHolidayCalendar {
    /// Public holidays plus weekends
    pub fn new() -> Self {
        Self {
            weekends_toll_free: true,
            extra: HolidayList::default(),
        }
    }

    pub fn with_weekends(mut self, weekends_toll_free: bool) -> Self {
        self.weekends_toll_free = weekends_toll_free;
        self
    }

    /// Additional toll-free dates on top of the public holidays
    pub fn with_extra_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.extra = HolidayList::new(dates);
        self
    }

    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        holiday_name(date).is_some()
    }

    /// All public holidays of `year` in date order
    pub fn holidays(year: i32) -> Vec<(NaiveDate, &'static str)> {
        let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| d.year() == year)
            .filter_map(|d| holiday_name(d).map(|name| (d, name)))
            .collect()
    }
}

impl Default for SwedishHolidayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl TollFreeCalendar for SwedishHolidayCalendar {
    fn is_toll_free(&self, date: NaiveDate) -> bool {
        (self.weekends_toll_free && is_weekend(date))
            || self.is_public_holiday(date)
            || self.extra.contains(date)
    }
}

/// Name of the Swedish public holiday falling on `date`, if any
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    let fixed = match (date.month(), date.day()) {
        (1, 1) => Some("New Year's Day"),
        (1, 6) => Some("Epiphany"),
        (5, 1) => Some("May Day"),
        (6, 6) => Some("National Day"),
        (12, 24) => Some("Christmas Eve"),
        (12, 25) => Some("Christmas Day"),
        (12, 26) => Some("Boxing Day"),
        (12, 31) => Some("New Year's Eve"),
        _ => None,
    };
    if fixed.is_some() {
        return fixed;
    }

    match (date.month(), date.day(), date.weekday()) {
        (6, 19..=25, Weekday::Fri) => return Some("Midsummer Eve"),
        (6, 20..=26, Weekday::Sat) => return Some("Midsummer Day"),
        (10, 31, Weekday::Sat) | (11, 1..=6, Weekday::Sat) => return Some("All Saints' Day"),
        _ => {}
    }

    let easter = easter_sunday(date.year())?;
    match (date - easter).num_days() {
        -2 => Some("Good Friday"),
        -1 => Some("Easter Saturday"),
        0 => Some("Easter Sunday"),
        1 => Some("Easter Monday"),
        39 => Some("Ascension Day"),
        49 => Some("Whitsunday"),
        _ => None,
    }
}

/// Gregorian Easter Sunday (anonymous Gregorian algorithm)
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
