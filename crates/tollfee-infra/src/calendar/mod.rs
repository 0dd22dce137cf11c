//! Concrete toll-free calendars

pub mod swedish;

pub use swedish::{easter_sunday, holiday_name, SwedishHolidayCalendar};
