//! Infrastructure layer - holiday calendars, tariff file loading

pub mod calendar;
pub mod tariff_loader;

pub use calendar::SwedishHolidayCalendar;
pub use tariff_loader::TariffLoader;
