//! Domain services

pub mod calendar;
pub mod toll_engine;

pub use calendar::{HolidayList, TollFreeCalendar};
pub use toll_engine::{ChargeWindow, FeeBreakdown, TollEngine};
