//! Domain models and services for toll fee calculation

pub mod model;
pub mod service;

pub use model::{FeeRules, FeeSchedule, Tariff, TimeBand, TollExemptions, Vehicle};
pub use service::{ChargeWindow, FeeBreakdown, HolidayList, TollEngine, TollFreeCalendar};
