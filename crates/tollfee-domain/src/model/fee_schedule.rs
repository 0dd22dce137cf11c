//! Fee schedule: ordered time bands for one day

use chrono::NaiveTime;
use serde::Serialize;
use tollfee_types::ScheduleError;

use super::TimeBand;

/// Reference weekday schedule as (start, end, fee)
const STANDARD_BANDS: [(&str, &str, u32); 9] = [
    ("06:00", "06:29", 8),
    ("06:30", "06:59", 13),
    ("07:00", "07:59", 18),
    ("08:00", "08:29", 13),
    ("08:30", "14:59", 8),
    ("15:00", "15:29", 13),
    ("15:30", "16:59", 18),
    ("17:00", "17:59", 13),
    ("18:00", "18:29", 8),
];

/// Immutable lookup table from time of day to fee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeSchedule {
    bands: Vec<TimeBand>,
}

impl FeeSchedule {
    /// Build a schedule, rejecting inverted or overlapping bands.
    ///
    /// Band order is kept as given.
    pub fn new(bands: Vec<TimeBand>) -> Result<Self, ScheduleError> {
        for band in &bands {
            if band.start() > band.end() {
                return Err(ScheduleError::InvalidBand {
                    start: band.start(),
                    end: band.end(),
                });
            }
        }

        let mut by_start: Vec<&TimeBand> = bands.iter().collect();
        by_start.sort_by_key(|b| b.start());
        for pair in by_start.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if first.overlaps(second) {
                return Err(ScheduleError::OverlappingBands {
                    first_start: first.start(),
                    first_end: first.end(),
                    second_start: second.start(),
                    second_end: second.end(),
                });
            }
        }

        Ok(Self { bands })
    }

    /// The reference schedule: 06:00-18:29, fees of 8, 13 or 18
    pub fn standard() -> Self {
        STANDARD_BANDS
            .iter()
            .map(|&(start, end, fee)| TimeBand::parse(start, end, fee))
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::new)
            .expect("reference bands are valid and non-overlapping")
    }

    /// Fee of the first band containing `time`, or 0 outside every band
    pub fn fee_for_time(&self, time: NaiveTime) -> u32 {
        self.bands
            .iter()
            .find(|band| band.contains(time))
            .map_or(0, |band| band.fee())
    }

    pub fn bands(&self) -> &[TimeBand] {
        &self.bands
    }

    /// Highest fee any single band charges
    pub fn max_band_fee(&self) -> u32 {
        self.bands.iter().map(|b| b.fee()).max().unwrap_or(0)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_standard_schedule_is_valid() {
        let standard = FeeSchedule::standard();
        assert_eq!(standard.bands().len(), 9);
        let rebuilt = FeeSchedule::new(standard.bands().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
    }

    #[test]
    fn test_standard_fees() {
        let schedule = FeeSchedule::standard();
        assert_eq!(schedule.fee_for_time(t(6, 0)), 8);
        assert_eq!(schedule.fee_for_time(t(6, 30)), 13);
        assert_eq!(schedule.fee_for_time(t(7, 30)), 18);
        assert_eq!(schedule.fee_for_time(t(8, 0)), 13);
        assert_eq!(schedule.fee_for_time(t(14, 30)), 8);
        assert_eq!(schedule.fee_for_time(t(15, 0)), 13);
        assert_eq!(schedule.fee_for_time(t(16, 59)), 18);
        assert_eq!(schedule.fee_for_time(t(17, 34)), 13);
        assert_eq!(schedule.fee_for_time(t(18, 29)), 8);
    }

    #[test]
    fn test_seconds_within_last_minute_of_band() {
        let schedule = FeeSchedule::standard();
        let hms = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        assert_eq!(schedule.fee_for_time(hms(7, 59, 30)), 18);
        assert_eq!(schedule.fee_for_time(hms(6, 29, 59)), 8);
        assert_eq!(schedule.fee_for_time(hms(18, 29, 59)), 8);
        assert_eq!(schedule.fee_for_time(hms(18, 30, 0)), 0);
    }

    #[test]
    fn test_overlap_checked_at_minute_resolution() {
        let hms = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        let early = TimeBand::new(hms(7, 0, 0), hms(7, 59, 10), 18);
        let late = TimeBand::new(hms(7, 59, 40), hms(8, 29, 0), 13);
        let err = FeeSchedule::new(vec![early, late]).unwrap_err();
        assert!(matches!(err, ScheduleError::OverlappingBands { .. }));
    }

    #[test]
    fn test_outside_bands_is_free() {
        let schedule = FeeSchedule::standard();
        assert_eq!(schedule.fee_for_time(t(2, 0)), 0);
        assert_eq!(schedule.fee_for_time(t(5, 59)), 0);
        assert_eq!(schedule.fee_for_time(t(18, 30)), 0);
        assert_eq!(schedule.fee_for_time(t(23, 59)), 0);
    }

    #[test]
    fn test_chargeable_hours_have_no_gaps() {
        let schedule = FeeSchedule::standard();
        let mut time = t(6, 0);
        while time <= t(18, 29) {
            assert!(schedule.fee_for_time(time) > 0, "no fee at {}", time);
            time += chrono::Duration::minutes(1);
        }
    }

    #[test]
    fn test_max_band_fee() {
        assert_eq!(FeeSchedule::standard().max_band_fee(), 18);
        assert_eq!(FeeSchedule::new(vec![]).unwrap().max_band_fee(), 0);
    }

    #[test]
    fn test_rejects_inverted_band() {
        let band = TimeBand::new(t(9, 0), t(8, 0), 5);
        assert_eq!(
            FeeSchedule::new(vec![band]),
            Err(ScheduleError::InvalidBand { start: t(9, 0), end: t(8, 0) })
        );
    }

    #[test]
    fn test_rejects_overlap_regardless_of_order() {
        let late = TimeBand::new(t(8, 0), t(9, 0), 5);
        let early = TimeBand::new(t(7, 0), t(8, 0), 5);
        let err = FeeSchedule::new(vec![late, early]).unwrap_err();
        assert!(matches!(err, ScheduleError::OverlappingBands { .. }));
    }

    #[test]
    fn test_preserves_band_order() {
        let late = TimeBand::new(t(9, 0), t(9, 59), 5);
        let early = TimeBand::new(t(7, 0), t(7, 59), 7);
        let schedule = FeeSchedule::new(vec![late, early]).unwrap();
        assert_eq!(schedule.bands()[0], late);
        assert_eq!(schedule.fee_for_time(t(7, 15)), 7);
        assert_eq!(schedule.fee_for_time(t(9, 15)), 5);
    }
}
