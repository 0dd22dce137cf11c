//! Time-of-day fee bands

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use tollfee_types::ScheduleError;

/// A contiguous time-of-day range charged at a fixed fee.
///
/// Both bounds are inclusive and held in whole minutes, so a band ending at
/// 06:29 also covers 06:29:59. Seconds on the bounds are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBand {
    start: NaiveTime,
    end: NaiveTime,
    fee: u32,
}

impl TimeBand {
    pub fn new(start: NaiveTime, end: NaiveTime, fee: u32) -> Self {
        Self {
            start: truncate_to_minute(start),
            end: truncate_to_minute(end),
            fee,
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }

    /// Build a band from `HH:MM` strings
    pub fn parse(start: &str, end: &str, fee: u32) -> Result<Self, ScheduleError> {
        Ok(Self::new(parse_time_of_day(start)?, parse_time_of_day(end)?, fee))
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        let time = truncate_to_minute(time);
        time >= self.start && time <= self.end
    }

    pub fn overlaps(&self, other: &TimeBand) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Parse a `HH:MM` time of day
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
